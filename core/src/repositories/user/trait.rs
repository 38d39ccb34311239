//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::errors::DomainError;
use crate::repositories::record::RecordRepository;

/// Repository trait for User persistence.
///
/// Besides the generic record operations, users are looked up by the token
/// subject (email) and by the login pair (email + phone).
#[async_trait]
pub trait UserRepository: RecordRepository<User> {
    /// Find the user whose email is the token subject
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user has this email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find the user matching both the email and the phone
    async fn find_by_credentials(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, DomainError>;

    /// List users in id order, returning at most `limit` rows when given
    async fn list_users(&self, limit: Option<u32>) -> Result<Vec<User>, DomainError>;
}
