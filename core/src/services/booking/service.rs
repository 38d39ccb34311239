//! Reservations with a computed price, and the renter's travel history

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, NewReservation, Reservation, User};
use crate::domain::value_objects::Travel;
use crate::domain::Record;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ListingRepository, RecordRepository, TravelRepository, UserRepository};

/// A stay requested by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub item_id: i64,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub passengers_number: i32,
}

pub struct BookingService {
    reservation_repository: Arc<dyn RecordRepository<Reservation>>,
    travel_repository: Arc<dyn TravelRepository>,
    listing_repository: Arc<dyn ListingRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl BookingService {
    pub fn new(
        reservation_repository: Arc<dyn RecordRepository<Reservation>>,
        travel_repository: Arc<dyn TravelRepository>,
        listing_repository: Arc<dyn ListingRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reservation_repository,
            travel_repository,
            listing_repository,
            user_repository,
        }
    }

    /// Books a stay for `renter`; the price is the nightly price times the
    /// number of nights
    pub async fn reserve(
        &self,
        renter: &User,
        request: ReservationRequest,
    ) -> DomainResult<Reservation> {
        Reservation::check_dates(request.entry_date, request.exit_date)?;

        let item = self
            .listing_repository
            .find_by_id(request.item_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Item::RESOURCE))?;

        let nights = (request.exit_date - request.entry_date).num_days();
        let final_price = item
            .price
            .checked_mul(Decimal::from(nights))
            .ok_or_else(|| DomainError::Validation {
                message: "final_price is too large".to_string(),
            })?;
        let reservation = Reservation::from_new(NewReservation {
            renter_id: renter.user_id,
            item_id: item.item_id,
            entry_date: request.entry_date,
            exit_date: request.exit_date,
            passengers_number: request.passengers_number,
            final_price,
        });
        reservation.validate()?;

        let reservation = self.reservation_repository.create(reservation).await?;
        tracing::info!(
            res_id = reservation.res_id,
            renter_id = renter.user_id,
            item_id = item.item_id,
            nights = nights,
            event = "reservation_created",
            "Created reservation"
        );
        Ok(reservation)
    }

    /// Approved and paid stays of a renter
    pub async fn travels(&self, renter_id: i64) -> DomainResult<Vec<Travel>> {
        if self
            .user_repository
            .find_by_id(renter_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(User::RESOURCE));
        }
        self.travel_repository.travels(renter_id).await
    }
}
