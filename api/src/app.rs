//! Application state and factory
//!
//! `AppState` holds the repositories and the services built on them; it is
//! constructed once at startup and shared with every worker through
//! `web::Data`. `create_app` wires middleware, extractor error handlers and
//! routes around it.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App};

use jb_core::domain::Record;
use jb_core::repositories::{Repositories, RepositoryFor};
use jb_core::services::{
    AuthService, BookingService, FavoriteService, ListingService, MessagingService,
    RecordService, TokenService, UserService,
};
use jb_infra::DatabasePool;
use jb_shared::{CorsConfig, Environment};

use crate::handlers::error::{
    form_error_handler, json_error_handler, path_error_handler, query_error_handler,
};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Shared services of the running application
pub struct AppState {
    pub repositories: Repositories,
    pub token_service: Arc<TokenService>,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub listing_service: ListingService,
    pub messaging_service: MessagingService,
    pub favorite_service: FavoriteService,
    pub booking_service: BookingService,
    /// Pool pinged by `/health`; absent when running on in-memory storage
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn new(repositories: Repositories, token_service: TokenService) -> Self {
        let token_service = Arc::new(token_service);
        let repos = &repositories;

        Self {
            auth_service: AuthService::new(repos.users.clone(), token_service.clone()),
            user_service: UserService::new(repos.users.clone()),
            listing_service: ListingService::new(repos.listings.clone()),
            messaging_service: MessagingService::new(
                repos.messages.clone(),
                repos.inbox.clone(),
                repos.users.clone(),
                repos.listings.clone(),
            ),
            favorite_service: FavoriteService::new(repos.likes.clone(), repos.listings.clone()),
            booking_service: BookingService::new(
                repos.reservations.clone(),
                repos.travels.clone(),
                repos.listings.clone(),
                repos.users.clone(),
            ),
            token_service,
            repositories,
            database: None,
        }
    }

    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }

    /// CRUD service for one of the generic record types
    pub fn records<E>(&self) -> RecordService<E>
    where
        E: Record,
        Repositories: RepositoryFor<E>,
    {
        RecordService::new(self.repositories.of::<E>())
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    cors: &CorsConfig,
    environment: Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(create_cors(cors, environment))
        .wrap(Logger::default())
        .configure(routes::configure)
        .default_service(web::route().to(routes::not_found))
}
