//! In-memory implementation of ListingRepository

use async_trait::async_trait;

use crate::domain::entities::{Item, Location, NewLocation};
use crate::domain::value_objects::{Listing, ListingSearch};
use crate::domain::{Record, RecordFilter};
use crate::errors::DomainError;
use crate::repositories::record::{InMemoryRepository, RecordRepository};

use super::trait_::ListingRepository;

/// Listing repository over shared item and location tables
#[derive(Clone, Default)]
pub struct InMemoryListingRepository {
    items: InMemoryRepository<Item>,
    locations: InMemoryRepository<Location>,
}

impl InMemoryListingRepository {
    pub fn new(items: InMemoryRepository<Item>, locations: InMemoryRepository<Location>) -> Self {
        Self { items, locations }
    }

    async fn location_of(&self, item_id: i64) -> Result<Option<Location>, DomainError> {
        let found = self
            .locations
            .list(&RecordFilter::new().eq("item_id", item_id))
            .await?;
        Ok(found.into_iter().next())
    }
}

#[async_trait]
impl RecordRepository<Item> for InMemoryListingRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        self.items.find_by_id(id).await
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<Item>, DomainError> {
        self.items.list(filter).await
    }

    async fn create(&self, record: Item) -> Result<Item, DomainError> {
        self.items.create(record).await
    }

    async fn update(&self, record: Item) -> Result<Item, DomainError> {
        self.items.update(record).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.items.delete(id).await
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn search(&self, search: &ListingSearch) -> Result<Vec<Listing>, DomainError> {
        let locations = self.locations.snapshot().await;
        let listings = self
            .items
            .snapshot()
            .await
            .into_iter()
            .filter_map(|item| {
                let location = locations.iter().find(|l| l.item_id == item.item_id);
                search.matches(&item, location).then(|| Listing {
                    location: location.cloned(),
                    item,
                })
            })
            .collect();
        Ok(listings)
    }

    async fn find_listing(&self, item_id: i64) -> Result<Option<Listing>, DomainError> {
        let Some(item) = self.items.find_by_id(item_id).await? else {
            return Ok(None);
        };
        let location = self.location_of(item_id).await?;
        Ok(Some(Listing { item, location }))
    }

    async fn create_listing(
        &self,
        item: Item,
        location: Option<NewLocation>,
    ) -> Result<Listing, DomainError> {
        let item = self.items.create(item).await?;
        let location = match location {
            Some(mut new) => {
                new.item_id = item.item_id;
                match self.locations.create(Location::from_new(new)).await {
                    Ok(location) => Some(location),
                    Err(err) => {
                        self.items.delete(item.item_id).await?;
                        return Err(err);
                    }
                }
            }
            None => None,
        };
        Ok(Listing { item, location })
    }
}
