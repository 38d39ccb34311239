use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::messaging::AddFavoriteRequest;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

pub async fn add(
    state: web::Data<AppState>,
    user: CurrentUser,
    body: web::Json<AddFavoriteRequest>,
) -> Result<HttpResponse, ApiError> {
    let like = state.favorite_service.add(&user, body.item_id).await?;
    Ok(HttpResponse::Created().json(like))
}

pub async fn list(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let likes = state.favorite_service.list(&user).await?;
    Ok(HttpResponse::Ok().json(likes))
}

pub async fn remove(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let like = state
        .favorite_service
        .remove(&user, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(like))
}
