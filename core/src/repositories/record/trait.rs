//! Repository trait shared by every entity.

use async_trait::async_trait;

use crate::domain::{Record, RecordFilter};
use crate::errors::DomainError;

/// Persistence operations available for any [`Record`].
///
/// Implementations translate a violated unique constraint into
/// `DomainError::Conflict` and never report a missing row as an error from
/// the lookup methods.
#[async_trait]
pub trait RecordRepository<E: Record>: Send + Sync {
    /// Find a record by its primary key
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError>;

    /// List records matching every condition of `filter`, in id order
    async fn list(&self, filter: &RecordFilter) -> Result<Vec<E>, DomainError>;

    /// Insert a record and return it with its assigned id
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - the record duplicates a unique key
    async fn create(&self, record: E) -> Result<E, DomainError>;

    /// Replace the stored record that has the same id
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - no record has this id
    /// * `Err(DomainError::Conflict)` - the new values duplicate a unique key
    async fn update(&self, record: E) -> Result<E, DomainError>;

    /// Delete a record by id, returning whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
