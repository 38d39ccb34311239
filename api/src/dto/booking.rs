use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::services::ReservationRequest;

/// Body of `POST /reservations`; the renter is the caller and the price is
/// computed from the listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub item_id: i64,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    #[validate(range(min = 1, max = 100))]
    pub passengers_number: i32,
}

impl From<CreateReservationRequest> for ReservationRequest {
    fn from(request: CreateReservationRequest) -> Self {
        Self {
            item_id: request.item_id,
            entry_date: request.entry_date,
            exit_date: request.exit_date,
            passengers_number: request.passengers_number,
        }
    }
}
