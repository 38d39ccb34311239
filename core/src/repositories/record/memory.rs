//! In-memory implementation of `RecordRepository`, used by tests and by the
//! server when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Record, RecordFilter};
use crate::errors::DomainError;

use super::trait_::RecordRepository;

/// Table of records keyed by id.
///
/// Clones share the same rows, so one table can back several repositories.
/// Unique keys are enforced; foreign keys and cascades are not.
pub struct InMemoryRepository<E> {
    rows: Arc<RwLock<BTreeMap<i64, E>>>,
    next_id: Arc<AtomicI64>,
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<E: Record> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// All rows in id order
    pub async fn snapshot(&self) -> Vec<E> {
        self.rows.read().await.values().cloned().collect()
    }

    fn conflict() -> DomainError {
        DomainError::conflict(format!("{} already exists", E::RESOURCE))
    }
}

impl<E: Record> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicates<E: Record>(rows: &BTreeMap<i64, E>, record: &E) -> bool {
    let keys = record.unique_keys();
    if keys.is_empty() {
        return false;
    }
    rows.values()
        .filter(|r| r.id() != record.id())
        .any(|r| r.unique_keys().iter().any(|key| keys.contains(key)))
}

#[async_trait]
impl<E: Record> RecordRepository<E> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<E>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|r| filter.matches(*r))
            .cloned()
            .collect())
    }

    async fn create(&self, mut record: E) -> Result<E, DomainError> {
        let mut rows = self.rows.write().await;

        record.set_id(0);
        if duplicates(&rows, &record) {
            return Err(Self::conflict());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.set_id(id);
        rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: E) -> Result<E, DomainError> {
        let mut rows = self.rows.write().await;

        if !rows.contains_key(&record.id()) {
            return Err(DomainError::not_found(E::RESOURCE));
        }
        if duplicates(&rows, &record) {
            return Err(Self::conflict());
        }

        rows.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).is_some())
    }
}
