use actix_web::{web, HttpResponse};

use crate::app::AppState;

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "Hello": "World" }))
}

/// Health check; pings the database when one is configured
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.database {
        None => "in-memory",
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            Ok(false) => "down",
            Err(e) => {
                log::error!("Database health check failed: {}", e);
                "down"
            }
        },
    };

    let body = serde_json::json!({
        "status": if database == "down" { "unhealthy" } else { "healthy" },
        "database": database,
        "service": "jabama-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if database == "down" {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}
