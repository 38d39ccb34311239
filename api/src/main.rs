use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{error, info};

use jb_api::{create_app, AppState};
use jb_core::services::{TokenService, TokenServiceConfig};
use jb_infra::{mysql_repositories, DatabasePool};
use jb_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env before anything else
    let config = AppConfig::from_env();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting Jabama API Server ({})", config.environment);

    let issues = config.production_issues();
    if !issues.is_empty() {
        for issue in &issues {
            error!("Configuration issue: {}", issue);
        }
        anyhow::bail!("refusing to start with {} configuration issue(s)", issues.len());
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let repositories = mysql_repositories(database.get_pool().clone());
    let token_service = TokenService::new(TokenServiceConfig::from_jwt_config(&config.auth.jwt)?);
    let state = web::Data::new(
        AppState::new(repositories, token_service).with_database(database.clone()),
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let environment = config.environment;
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let served = server.bind(&bind_address)?.run().await;

    database.close().await;
    served?;

    info!("Server stopped");
    Ok(())
}
