use actix_web::{web, HttpResponse, Scope};

use jb_core::domain::entities::Reservation;

use crate::app::AppState;
use crate::dto::booking::CreateReservationRequest;
use crate::dto::validated;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

use super::records::record_scope;

/// Generic read/update/delete plus creation with a computed price
pub fn scope() -> Scope {
    record_scope::<Reservation>("/reservations", false).route("", web::post().to(reserve))
}

pub async fn reserve(
    state: web::Data<AppState>,
    renter: CurrentUser,
    body: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = validated(body.into_inner())?;
    let reservation = state
        .booking_service
        .reserve(&renter, request.into())
        .await?;
    Ok(HttpResponse::Created().json(reservation))
}
