//! The `Record` trait shared by every persisted entity, and the equality
//! filter used by list queries.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::ValidationError;

/// A persisted entity with a server-assigned numeric id.
///
/// Every entity is created from its `New` payload, mutated through its
/// `Patch` (only the provided fields change) and deleted by id.
pub trait Record: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Name used in `NotFound` / `Conflict` messages
    const RESOURCE: &'static str;

    /// Foreign-key columns accepted as equality filters on list
    const FILTERS: &'static [&'static str] = &[];

    /// Creation payload (every field except the id)
    type New: DeserializeOwned + Debug + Send + Sync + 'static;

    /// Partial update payload
    type Patch: DeserializeOwned + Debug + Default + Send + Sync + 'static;

    /// Builds an unsaved record; the id stays 0 until the repository assigns one
    fn from_new(new: Self::New) -> Self;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Applies the provided patch fields, leaving the others unchanged
    fn apply(&mut self, patch: Self::Patch);

    /// Checks field-level invariants before a write
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Natural keys guarded by unique constraints, as `(constraint, value)`
    /// pairs; two records clash when they share a value under the same
    /// constraint
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Value of a filterable column (one of `FILTERS`)
    fn filter_value(&self, _field: &str) -> Option<i64> {
        None
    }
}

/// Conjunction of `column = value` conditions over foreign-key columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    conditions: Vec<(&'static str, i64)>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `field = value` condition
    pub fn eq(mut self, field: &'static str, value: i64) -> Self {
        self.conditions.push((field, value));
        self
    }

    /// Parses query-string parameters against `E::FILTERS`.
    ///
    /// Unknown keys and non-numeric values are rejected.
    pub fn parse<E: Record>(params: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let sorted: BTreeMap<&String, &String> = params.iter().collect();
        let mut filter = Self::new();
        for (key, value) in sorted {
            let field = E::FILTERS
                .iter()
                .copied()
                .find(|f| *f == key.as_str())
                .ok_or_else(|| ValidationError::UnknownFilter { field: key.clone() })?;
            let value = value
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::invalid(field))?;
            filter = filter.eq(field, value);
        }
        Ok(filter)
    }

    pub fn conditions(&self) -> &[(&'static str, i64)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluates the filter against an in-memory record
    pub fn matches<E: Record>(&self, record: &E) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| record.filter_value(field) == Some(*value))
    }
}
