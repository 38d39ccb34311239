//! Listing repository trait: items plus the location joined onto them.

use async_trait::async_trait;

use crate::domain::entities::{Item, NewLocation};
use crate::domain::value_objects::{Listing, ListingSearch};
use crate::errors::DomainError;
use crate::repositories::record::RecordRepository;

#[async_trait]
pub trait ListingRepository: RecordRepository<Item> {
    /// Listings matching every provided criterion, in id order
    async fn search(&self, search: &ListingSearch) -> Result<Vec<Listing>, DomainError>;

    /// A listing with its location
    async fn find_listing(&self, item_id: i64) -> Result<Option<Listing>, DomainError>;

    /// Insert an item and, when given, its location as one unit.
    ///
    /// The location's `item_id` is replaced by the new item's id.
    async fn create_listing(
        &self,
        item: Item,
        location: Option<NewLocation>,
    ) -> Result<Listing, DomainError>;
}
