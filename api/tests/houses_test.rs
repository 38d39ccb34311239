//! Integration tests for listings

mod common;

use actix_web::{http::StatusCode, test};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use common::{bearer, create_house, init_app, login, register, state};

fn price(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[actix_web::test]
async fn test_create_house_stores_owner_and_location() {
    let app = init_app(state()).await;
    let owner = register(&app, "09120000001", "host@x.com").await;
    let token = login(&app, "host@x.com", "09120000001").await;

    let house = create_house(&app, &token, "Sea Villa", "1500.00").await;
    assert_eq!(house["owner_id"], owner["user_id"]);
    assert_eq!(house["location"]["city"], "Ramsar");
    assert_eq!(house["location"]["item_id"], house["item_id"]);

    let req = test::TestRequest::get()
        .uri(&format!("/houses/{}", house["item_id"]))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["name"], "Sea Villa");
    assert_eq!(price(&fetched["price"]), Decimal::new(1500, 0));
}

#[actix_web::test]
async fn test_create_house_requires_token() {
    let app = init_app(state()).await;
    let req = test::TestRequest::post()
        .uri("/create-house")
        .set_json(json!({ "name": "Nowhere", "price": "10", "about": null, "location": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_duplicate_house_is_a_conflict() {
    let app = init_app(state()).await;
    register(&app, "09120000001", "host@x.com").await;
    let token = login(&app, "host@x.com", "09120000001").await;
    create_house(&app, &token, "Sea Villa", "1500").await;

    let req = test::TestRequest::post()
        .uri("/create-house")
        .insert_header(bearer(&token))
        .set_json(json!({
            "name": "Sea Villa",
            "price": "900",
            "about": "Two bedrooms near the sea",
            "location": null
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_search_filters_by_city_and_price() {
    let app = init_app(state()).await;
    register(&app, "09120000001", "host@x.com").await;
    let token = login(&app, "host@x.com", "09120000001").await;
    create_house(&app, &token, "Sea Villa", "1500").await;
    create_house(&app, &token, "Forest Cabin", "600").await;

    let req = test::TestRequest::get()
        .uri("/houses?city=ramsar&max_price=1000")
        .to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Forest Cabin");

    let req = test::TestRequest::get().uri("/houses?name=villa").to_request();
    let found: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Sea Villa");

    let req = test::TestRequest::get()
        .uri("/houses?min_price=2000&max_price=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_only_owner_can_update_or_delete() {
    let app = init_app(state()).await;
    register(&app, "09120000001", "host@x.com").await;
    register(&app, "09120000002", "guest@x.com").await;
    let host = login(&app, "host@x.com", "09120000001").await;
    let guest = login(&app, "guest@x.com", "09120000002").await;
    let house = create_house(&app, &host, "Sea Villa", "1500").await;
    let uri = format!("/houses/{}", house["item_id"]);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&guest))
        .set_json(json!({ "price": "1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&host))
        .set_json(json!({ "price": "1750" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(price(&updated["price"]), Decimal::new(1750, 0));
    assert_eq!(updated["name"], "Sea Villa");

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&guest))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&host))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "House not found");
}

#[actix_web::test]
async fn test_house_price_must_fit_storage() {
    let app = init_app(state()).await;
    register(&app, "09120000001", "host@x.com").await;
    let token = login(&app, "host@x.com", "09120000001").await;

    let req = test::TestRequest::post()
        .uri("/create-house")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Palace", "price": "70000000000000000000000000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let house = create_house(&app, &token, "Cottage", "99999999.99").await;
    let req = test::TestRequest::put()
        .uri(&format!("/houses/{}", house["item_id"]))
        .insert_header(bearer(&token))
        .set_json(json!({ "price": "10.001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::get()
        .uri(&format!("/houses/{}", house["item_id"]))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(price(&stored["price"]), Decimal::new(9_999_999_999, 2));
}
