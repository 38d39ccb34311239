//! Travel history: reservations joined with their application and invoice.

use async_trait::async_trait;

use crate::domain::value_objects::Travel;
use crate::errors::DomainError;

#[async_trait]
pub trait TravelRepository: Send + Sync {
    /// Reservations of `renter_id` whose application was approved and whose
    /// invoice is paid, in reservation id order
    async fn travels(&self, renter_id: i64) -> Result<Vec<Travel>, DomainError>;
}
