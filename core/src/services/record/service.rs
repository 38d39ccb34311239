//! List / get / create / update / delete for the entities that need no
//! behaviour beyond their own invariants

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Record, RecordFilter};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RecordRepository;

pub struct RecordService<E: Record> {
    repository: Arc<dyn RecordRepository<E>>,
}

impl<E: Record> RecordService<E> {
    pub fn new(repository: Arc<dyn RecordRepository<E>>) -> Self {
        Self { repository }
    }

    /// Records matching the query-string filters (foreign-key equality)
    pub async fn list(&self, params: &HashMap<String, String>) -> DomainResult<Vec<E>> {
        let filter = RecordFilter::parse::<E>(params)?;
        tracing::debug!(resource = E::RESOURCE, filter = ?filter, "Listing records");
        self.repository.list(&filter).await
    }

    pub async fn get(&self, id: i64) -> DomainResult<E> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(E::RESOURCE))
    }

    pub async fn create(&self, new: E::New) -> DomainResult<E> {
        let record = E::from_new(new);
        record.validate()?;

        let record = self.repository.create(record).await?;
        tracing::info!(
            resource = E::RESOURCE,
            id = record.id(),
            event = "record_created",
            "Created record"
        );
        Ok(record)
    }

    /// Applies the provided fields of `patch`, leaving the others unchanged
    pub async fn update(&self, id: i64, patch: E::Patch) -> DomainResult<E> {
        let mut record = self.get(id).await?;
        record.apply(patch);
        record.validate()?;

        let record = self.repository.update(record).await?;
        tracing::info!(
            resource = E::RESOURCE,
            id = id,
            event = "record_updated",
            "Updated record"
        );
        Ok(record)
    }

    /// Deletes a record and returns it as it was before deletion
    pub async fn delete(&self, id: i64) -> DomainResult<E> {
        let record = self.get(id).await?;
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(E::RESOURCE));
        }

        tracing::info!(
            resource = E::RESOURCE,
            id = id,
            event = "record_deleted",
            "Deleted record"
        );
        Ok(record)
    }
}
