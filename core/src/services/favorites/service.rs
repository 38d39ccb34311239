//! Favorite listings ("likes") of the authenticated user

use std::sync::Arc;

use crate::domain::entities::{Item, Like, NewLike, User};
use crate::domain::{Record, RecordFilter};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ListingRepository, RecordRepository};

pub struct FavoriteService {
    like_repository: Arc<dyn RecordRepository<Like>>,
    listing_repository: Arc<dyn ListingRepository>,
}

impl FavoriteService {
    pub fn new(
        like_repository: Arc<dyn RecordRepository<Like>>,
        listing_repository: Arc<dyn ListingRepository>,
    ) -> Self {
        Self {
            like_repository,
            listing_repository,
        }
    }

    /// Marks a listing as a favorite of `user`
    pub async fn add(&self, user: &User, item_id: i64) -> DomainResult<Like> {
        if self
            .listing_repository
            .find_by_id(item_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(Item::RESOURCE));
        }

        let like = Like::from_new(NewLike {
            user_id: user.user_id,
            item_id,
        });
        let like = self.like_repository.create(like).await.map_err(|err| {
            if err.is_conflict() {
                DomainError::conflict("Item is already in favorites")
            } else {
                err
            }
        })?;

        tracing::info!(
            user_id = user.user_id,
            item_id = item_id,
            event = "favorite_added",
            "Added favorite"
        );
        Ok(like)
    }

    pub async fn list(&self, user: &User) -> DomainResult<Vec<Like>> {
        self.like_repository
            .list(&RecordFilter::new().eq("user_id", user.user_id))
            .await
    }

    /// Removes a listing from the favorites of `user`
    pub async fn remove(&self, user: &User, item_id: i64) -> DomainResult<Like> {
        let filter = RecordFilter::new()
            .eq("user_id", user.user_id)
            .eq("item_id", item_id);
        let like = self
            .like_repository
            .list(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found(Like::RESOURCE))?;

        self.like_repository.delete(like.like_id).await?;
        tracing::info!(
            user_id = user.user_id,
            item_id = item_id,
            event = "favorite_removed",
            "Removed favorite"
        );
        Ok(like)
    }
}
