//! HTTP layer of the Jabama rental marketplace: actix-web routes, request
//! DTOs, bearer authentication and error rendering.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
