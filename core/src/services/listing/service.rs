//! House listings: search, creation with a location, owner-only edits

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, ItemPatch, Location, NewItem, NewLocation, User};
use crate::domain::value_objects::{Listing, ListingSearch};
use crate::domain::Record;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ListingRepository;

/// Location submitted together with a new listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingLocation {
    pub state: String,
    pub city: String,
    pub exact_loc: String,
}

/// A new listing; the owner is the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListing {
    pub name: String,
    pub price: Decimal,
    pub about: Option<String>,
    pub location: Option<ListingLocation>,
}

pub struct ListingService {
    listing_repository: Arc<dyn ListingRepository>,
}

impl ListingService {
    pub fn new(listing_repository: Arc<dyn ListingRepository>) -> Self {
        Self { listing_repository }
    }

    pub async fn search(&self, search: &ListingSearch) -> DomainResult<Vec<Listing>> {
        search.validate()?;
        self.listing_repository.search(search).await
    }

    pub async fn get(&self, item_id: i64) -> DomainResult<Listing> {
        self.listing_repository
            .find_listing(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Item::RESOURCE))
    }

    /// Creates a listing owned by `owner`, with its location when given
    pub async fn create(&self, owner: &User, new_listing: NewListing) -> DomainResult<Listing> {
        let item = Item::from_new(NewItem {
            owner_id: owner.user_id,
            name: new_listing.name,
            price: new_listing.price,
            about: new_listing.about,
        });
        item.validate()?;

        let location = new_listing.location.map(|l| NewLocation {
            state: l.state,
            city: l.city,
            exact_loc: l.exact_loc,
            item_id: 0,
        });
        if let Some(location) = &location {
            Location::from_new(location.clone()).validate()?;
        }

        let listing = self
            .listing_repository
            .create_listing(item, location)
            .await
            .map_err(|err| {
                if err.is_conflict() {
                    DomainError::conflict("House already exists")
                } else {
                    err
                }
            })?;

        tracing::info!(
            item_id = listing.item.item_id,
            owner_id = owner.user_id,
            event = "listing_created",
            "Created listing"
        );
        Ok(listing)
    }

    /// Applies a partial update; only the owner may edit a listing
    pub async fn update(&self, item_id: i64, patch: ItemPatch, caller: &User) -> DomainResult<Item> {
        let mut item = self.owned(item_id, caller).await?;
        item.apply(patch);
        item.validate()?;

        let item = self.listing_repository.update(item).await?;
        tracing::info!(item_id = item_id, event = "listing_updated", "Updated listing");
        Ok(item)
    }

    /// Deletes a listing; only the owner may delete it
    pub async fn delete(&self, item_id: i64, caller: &User) -> DomainResult<Item> {
        let item = self.owned(item_id, caller).await?;
        if !self.listing_repository.delete(item_id).await? {
            return Err(DomainError::not_found(Item::RESOURCE));
        }

        tracing::info!(item_id = item_id, event = "listing_deleted", "Deleted listing");
        Ok(item)
    }

    async fn owned(&self, item_id: i64, caller: &User) -> DomainResult<Item> {
        let item = self
            .listing_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Item::RESOURCE))?;
        if !item.is_owned_by(caller.user_id) {
            tracing::warn!(
                item_id = item_id,
                caller_id = caller.user_id,
                event = "listing_edit_forbidden",
                "Caller does not own the listing"
            );
            return Err(DomainError::forbidden());
        }
        Ok(item)
    }
}
