use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::user::{RegisterUserRequest, UpdateUserRequest, UsersQuery};
use crate::dto::validated;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<UsersQuery>,
) -> Result<HttpResponse, ApiError> {
    let users = state.user_service.list(query.limit).await?;
    Ok(HttpResponse::Ok().json(users))
}

pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user = state.user_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = validated(body.into_inner())?;
    request.check_phones()?;

    let user = state.user_service.register(request.into()).await?;
    Ok(HttpResponse::Created().json(user))
}

pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = validated(body.into_inner())?;
    request.check_phones()?;

    let user = state
        .user_service
        .update(path.into_inner(), request.into())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Deletes a user; the caller must be that user
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    caller: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let user = state.user_service.delete(path.into_inner(), &caller).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn delete_self(
    state: web::Data<AppState>,
    caller: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let user = state.user_service.delete(caller.user_id, &caller).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Paid, approved stays of a renter
pub async fn travels(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let travels = state.booking_service.travels(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(travels))
}
