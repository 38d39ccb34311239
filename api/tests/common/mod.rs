//! Helpers shared by the API integration tests

#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use serde_json::{json, Value};

use jb_api::{create_app, AppState};
use jb_core::repositories::Repositories;
use jb_core::services::{TokenService, TokenServiceConfig};
use jb_shared::{CorsConfig, Environment};

/// Application state over fresh in-memory repositories
pub fn state() -> web::Data<AppState> {
    web::Data::new(AppState::new(
        Repositories::in_memory(),
        TokenService::new(TokenServiceConfig::default()),
    ))
}

pub async fn init_app(
    state: web::Data<AppState>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(create_app(
        state,
        &CorsConfig::default(),
        Environment::Development,
    ))
    .await
}

pub fn user_payload(phone: &str, email: &str) -> Value {
    json!({
        "phone": phone,
        "first_name": "Ali",
        "last_name": "Rezaei",
        "national_code": "0012345678",
        "gender": "m",
        "date_of_birth": "1990-01-01",
        "email": email,
        "home_phone": null,
        "description": "Early riser"
    })
}

/// Registers a user and returns the created record
pub async fn register<S, B>(app: &S, phone: &str, email: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/register/user")
        .set_json(user_payload(phone, email))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

/// Logs in and returns the access token
pub async fn login<S, B>(app: &S, email: &str, phone: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/login-token")
        .set_form([("username", email), ("password", phone)])
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    body["access_token"]
        .as_str()
        .expect("access_token in login response")
        .to_string()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Creates a listing owned by the token holder and returns it
pub async fn create_house<S, B>(app: &S, token: &str, name: &str, price: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/create-house")
        .insert_header(bearer(token))
        .set_json(json!({
            "name": name,
            "price": price,
            "about": "Two bedrooms near the sea",
            "location": { "state": "Mazandaran", "city": "Ramsar", "exact_loc": "Beach road 12" }
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}
