//! HTTP route table

pub mod auth;
pub mod favorites;
pub mod houses;
pub mod messages;
pub mod records;
pub mod reservations;
pub mod root;
pub mod users;

use actix_web::{web, HttpResponse};

use jb_core::domain::entities::{
    Application, CommentSection, Feature, Invoice, InvoiceLine, ItemDescription, Location,
    OpenClose, Payment, Property, Rate, Rating, Rule, Type, TypeList,
};
use jb_shared::ErrorResponse;

use records::record_scope;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root::index))
        .route("/health", web::get().to(root::health))
        // Users and authentication
        .route("/users", web::get().to(users::list_users))
        .route("/users/{id}", web::get().to(users::get_user))
        .route("/users/{id}/travels", web::get().to(users::travels))
        .route("/register/user", web::post().to(users::register))
        .route("/user-update/{id}", web::put().to(users::update_user))
        .route("/delete-users/{id}", web::delete().to(users::delete_user))
        .route("/delete-user", web::delete().to(users::delete_self))
        .route("/login-token", web::post().to(auth::login))
        .route("/loged-user", web::get().to(auth::current_user))
        // Listings
        .route("/houses", web::get().to(houses::search))
        .route("/houses/{id}", web::get().to(houses::get_house))
        .route("/houses/{id}", web::put().to(houses::update_house))
        .route("/houses/{id}", web::delete().to(houses::delete_house))
        .route("/create-house", web::post().to(houses::create_house))
        // Messaging and favorites
        .route("/messages", web::post().to(messages::send))
        .route("/messages/{host_id}/{sender_id}", web::get().to(messages::conversation))
        .route("/all-messages/{host_id}", web::get().to(messages::inbox))
        .route("/favorites", web::get().to(favorites::list))
        .route("/favorites/add", web::post().to(favorites::add))
        .route("/favorites/{item_id}", web::delete().to(favorites::remove))
        // Listing attachments, feedback and the booking pipeline
        .service(record_scope::<Location>("/locations", true))
        .service(record_scope::<TypeList>("/type-lists", true))
        .service(record_scope::<Type>("/types", true))
        .service(record_scope::<Feature>("/features", true))
        .service(record_scope::<OpenClose>("/open-close", true))
        .service(record_scope::<Rule>("/rules", true))
        .service(record_scope::<Rating>("/ratings", true))
        .service(record_scope::<Rate>("/rates", true))
        .service(record_scope::<Property>("/properties", true))
        .service(record_scope::<ItemDescription>("/item-descriptions", true))
        .service(record_scope::<CommentSection>("/comments", true))
        .service(reservations::scope())
        .service(record_scope::<Application>("/applications", true))
        .service(record_scope::<Invoice>("/invoices", true))
        .service(record_scope::<Payment>("/payments", true))
        .service(record_scope::<InvoiceLine>("/invoice-lines", true));
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not Found"))
}
