use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::listing::{CreateHouseRequest, HouseSearchQuery, UpdateHouseRequest};
use crate::dto::validated;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<HouseSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let listings = state
        .listing_service
        .search(&query.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(listings))
}

pub async fn get_house(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let listing = state.listing_service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(listing))
}

/// Lists a house owned by the caller, with an optional location
pub async fn create_house(
    state: web::Data<AppState>,
    owner: CurrentUser,
    body: web::Json<CreateHouseRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = validated(body.into_inner())?;
    let listing = state.listing_service.create(&owner, request.into()).await?;
    Ok(HttpResponse::Created().json(listing))
}

pub async fn update_house(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    caller: CurrentUser,
    body: web::Json<UpdateHouseRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = validated(body.into_inner())?;
    let item = state
        .listing_service
        .update(path.into_inner(), request.into(), &caller)
        .await?;
    Ok(HttpResponse::Ok().json(item))
}

pub async fn delete_house(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    caller: CurrentUser,
) -> Result<HttpResponse, ApiError> {
    let item = state
        .listing_service
        .delete(path.into_inner(), &caller)
        .await?;
    Ok(HttpResponse::Ok().json(item))
}
