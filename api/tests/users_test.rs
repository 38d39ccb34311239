//! Integration tests for registration, update and deletion of users

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, init_app, login, register, state, user_payload};

#[actix_web::test]
async fn test_register_login_update_delete_walkthrough() {
    let app = init_app(state()).await;

    // Register A
    let user_a = register(&app, "09120000001", "a@x.com").await;
    let id = user_a["user_id"].as_i64().unwrap();
    assert!(id > 0);

    // Same phone, different email
    let req = test::TestRequest::post()
        .uri("/register/user")
        .set_json(user_payload("09120000001", "b@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Login yields a token for A
    let token = login(&app, "a@x.com", "09120000001").await;
    let req = test::TestRequest::get()
        .uri("/loged-user")
        .insert_header(bearer(&token))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["email"], "a@x.com");

    // Update only the description
    let req = test::TestRequest::put()
        .uri(&format!("/user-update/{}", id))
        .set_json(json!({ "description": "Night owl" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["description"], "Night owl");
    assert_eq!(updated["first_name"], user_a["first_name"]);

    // Delete A with A's own token
    let req = test::TestRequest::delete()
        .uri(&format!("/delete-users/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "User not found");
}

#[actix_web::test]
async fn test_duplicate_email_is_rejected_and_tokens_stay_with_their_owner() {
    let app = init_app(state()).await;
    let user_a = register(&app, "09120000001", "a@x.com").await;

    let req = test::TestRequest::post()
        .uri("/register/user")
        .set_json(user_payload("09120000002", "a@x.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Email already registered");

    // The rejected phone cannot log in, so no token can name A's email
    let req = test::TestRequest::post()
        .uri("/login-token")
        .set_form([("username", "a@x.com"), ("password", "09120000002")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Moving B onto A's email is rejected too
    let user_b = register(&app, "09120000002", "b@x.com").await;
    let req = test::TestRequest::put()
        .uri(&format!("/user-update/{}", user_b["user_id"]))
        .set_json(json!({ "email": "A@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // B's token resolves to B, and deleting self removes B only
    let token = login(&app, "b@x.com", "09120000002").await;
    let req = test::TestRequest::get()
        .uri("/loged-user")
        .insert_header(bearer(&token))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["user_id"], user_b["user_id"]);

    let req = test::TestRequest::delete()
        .uri("/delete-user")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user_a["user_id"]))
        .to_request();
    let still_there: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(still_there["email"], "a@x.com");
}

#[actix_web::test]
async fn test_delete_other_user_is_forbidden() {
    let app = init_app(state()).await;
    let victim = register(&app, "09120000001", "a@x.com").await;
    register(&app, "09120000002", "b@x.com").await;
    let token = login(&app, "b@x.com", "09120000002").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/delete-users/{}", victim["user_id"]))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Not authorized to take action");
}

#[actix_web::test]
async fn test_delete_self() {
    let app = init_app(state()).await;
    let user = register(&app, "09120000001", "a@x.com").await;
    let token = login(&app, "a@x.com", "09120000001").await;

    let req = test::TestRequest::delete()
        .uri("/delete-user")
        .insert_header(bearer(&token))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["user_id"], user["user_id"]);

    // The token now points at a missing user
    let req = test::TestRequest::get()
        .uri("/loged-user")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_list_users_honours_limit() {
    let app = init_app(state()).await;
    for n in 1..=3 {
        register(&app, &format!("0912000000{}", n), &format!("u{}@x.com", n)).await;
    }

    let req = test::TestRequest::get().uri("/users?limit=2").to_request();
    let users: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(users.len(), 2);

    let req = test::TestRequest::get().uri("/users").to_request();
    let users: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(users.len(), 3);
}

#[actix_web::test]
async fn test_invalid_registration_is_unprocessable() {
    let app = init_app(state()).await;

    let mut payload = user_payload("12345", "a@x.com");
    let req = test::TestRequest::post()
        .uri("/register/user")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    payload["phone"] = json!("09120000001");
    payload["email"] = json!("not-an-email");
    let req = test::TestRequest::post()
        .uri("/register/user")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Missing required field
    let req = test::TestRequest::post()
        .uri("/register/user")
        .set_json(json!({ "email": "a@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn test_update_missing_user_is_not_found() {
    let app = init_app(state()).await;
    let req = test::TestRequest::put()
        .uri("/user-update/42")
        .set_json(json!({ "description": "ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_non_numeric_id_is_unprocessable() {
    let app = init_app(state()).await;
    let req = test::TestRequest::get().uri("/users/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
