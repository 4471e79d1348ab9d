//! Health check endpoint.

use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::models::ApiResponse;

/// Health payload carried in the standard envelope.
#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    /// "connected" or "disconnected"
    pub database: &'static str,
    pub timestamp: String,
    pub version: &'static str,
}

/// Health check endpoint.
///
/// Always returns 200; an unreachable store only downgrades the
/// `database` field in the payload, never the HTTP status.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<HealthStatus>)
    )
)]
#[get("/health")]
pub async fn health(pool: web::Data<DbPool>) -> HttpResponse {
    let database = if pool.ping().await {
        "connected"
    } else {
        "disconnected"
    };

    HttpResponse::Ok().json(ApiResponse::ok(
        "Service is healthy",
        HealthStatus {
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
