//! List/get/create/update/delete endpoints shared by the record types that
//! carry no extra rules.

use std::collections::HashMap;

use actix_web::{web, HttpResponse, Scope};

use jb_core::domain::Record;
use jb_core::repositories::{Repositories, RepositoryFor};

use crate::app::AppState;
use crate::handlers::ApiError;

/// Scope serving `E` under `path`; `with_create` adds `POST path`
pub fn record_scope<E>(path: &str, with_create: bool) -> Scope
where
    E: Record,
    Repositories: RepositoryFor<E>,
{
    let scope = web::scope(path)
        .route("", web::get().to(list_records::<E>))
        .route("/{id}", web::get().to(get_record::<E>))
        .route("/{id}", web::put().to(update_record::<E>))
        .route("/{id}", web::delete().to(delete_record::<E>));

    if with_create {
        scope.route("", web::post().to(create_record::<E>))
    } else {
        scope
    }
}

/// Lists records; query parameters are equality filters on foreign keys
async fn list_records<E>(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, ApiError>
where
    E: Record,
    Repositories: RepositoryFor<E>,
{
    let records = state.records::<E>().list(&query).await?;
    Ok(HttpResponse::Ok().json(records))
}

async fn get_record<E>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    E: Record,
    Repositories: RepositoryFor<E>,
{
    let record = state.records::<E>().get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

async fn create_record<E>(
    state: web::Data<AppState>,
    body: web::Json<E::New>,
) -> Result<HttpResponse, ApiError>
where
    E: Record,
    Repositories: RepositoryFor<E>,
{
    let record = state.records::<E>().create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

async fn update_record<E>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<E::Patch>,
) -> Result<HttpResponse, ApiError>
where
    E: Record,
    Repositories: RepositoryFor<E>,
{
    let record = state
        .records::<E>()
        .update(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

async fn delete_record<E>(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    E: Record,
    Repositories: RepositoryFor<E>,
{
    let record = state.records::<E>().delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}
