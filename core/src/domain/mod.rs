//! Domain layer containing entities and value objects.

pub mod entities;
pub mod money;
pub mod record;
pub mod value_objects;

pub use record::{Record, RecordFilter};
