use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::messaging::SendMessageRequest;
use crate::dto::validated;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

pub async fn send(
    state: web::Data<AppState>,
    sender: CurrentUser,
    body: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = validated(body.into_inner())?;
    let message = state.messaging_service.send(&sender, request.into()).await?;
    Ok(HttpResponse::Created().json(message))
}

/// Every message the host received about their listings
pub async fn inbox(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    caller: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let messages = state
        .messaging_service
        .inbox(path.into_inner(), &caller)
        .await?;
    Ok(HttpResponse::Ok().json(messages))
}

/// Messages the host received from one sender
pub async fn conversation(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    caller: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let (host_id, sender_id) = path.into_inner();
    let messages = state
        .messaging_service
        .conversation(host_id, sender_id, &caller)
        .await?;
    Ok(HttpResponse::Ok().json(messages))
}
