//! In-memory implementation of UserRepository

use async_trait::async_trait;

use crate::domain::entities::User;
use crate::errors::DomainError;
use crate::repositories::record::InMemoryRepository;

use super::trait_::UserRepository;

/// Emails compare case-insensitively, as under the users table collation
fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .snapshot()
            .await
            .into_iter()
            .find(|u| same_email(&u.email, email)))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, DomainError> {
        Ok(self
            .snapshot()
            .await
            .into_iter()
            .find(|u| same_email(&u.email, email) && u.phone.as_deref() == Some(phone)))
    }

    async fn list_users(&self, limit: Option<u32>) -> Result<Vec<User>, DomainError> {
        let users = self.snapshot().await;
        Ok(match limit {
            Some(limit) => users.into_iter().take(limit as usize).collect(),
            None => users,
        })
    }
}
