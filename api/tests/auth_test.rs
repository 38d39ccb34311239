//! Integration tests for login and bearer authentication

mod common;

use actix_web::{
    http::{header, StatusCode},
    test,
};
use chrono::Duration;
use serde_json::Value;

use common::{bearer, init_app, register, state};

#[actix_web::test]
async fn test_login_returns_bearer_token() {
    let state = state();
    let app = init_app(state.clone()).await;
    register(&app, "09120000001", "a@x.com").await;

    let req = test::TestRequest::post()
        .uri("/login-token")
        .set_form([("username", "a@x.com"), ("password", "09120000001")])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Login Successful");
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user_detail"]["email"], "a@x.com");

    let claims = state
        .token_service
        .verify(body["access_token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, "a@x.com");
}

#[actix_web::test]
async fn test_login_with_wrong_phone_is_unauthorized() {
    let app = init_app(state()).await;
    register(&app, "09120000001", "a@x.com").await;

    let req = test::TestRequest::post()
        .uri("/login-token")
        .set_form([("username", "a@x.com"), ("password", "09129999999")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Incorrect email or phone");
}

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let app = init_app(state()).await;
    let req = test::TestRequest::get().uri("/loged-user").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Could not validate credentials");
}

#[actix_web::test]
async fn test_expired_token_is_unauthorized() {
    let state = state();
    let app = init_app(state.clone()).await;
    register(&app, "09120000001", "a@x.com").await;

    let token = state
        .token_service
        .issue_with_expiry("a@x.com", Duration::seconds(-60))
        .unwrap();
    let req = test::TestRequest::get()
        .uri("/loged-user")
        .insert_header(bearer(&token.access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_tampered_token_is_unauthorized() {
    let app = init_app(state()).await;
    register(&app, "09120000001", "a@x.com").await;
    let token = common::login(&app, "a@x.com", "09120000001").await;

    let tampered = format!("{}x", token);
    let req = test::TestRequest::get()
        .uri("/loged-user")
        .insert_header(bearer(&tampered))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_root_and_health() {
    let app = init_app(state()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["Hello"], "World");

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "in-memory");
}
