//! API handlers for the front desk REST endpoints

pub mod health;
pub mod keys;
pub mod openapi;
pub mod stats;
pub mod visitors;

use axum::{
    extract::{DefaultBodyLimit, FromRequest},
    routing::{get, put},
    Router,
};
use serde::Serialize;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::ToSchema;

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the API error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Result of a delete, after the log has been renumbered
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Number of entries left in the log
    pub remaining_count: usize,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let photos_prefix = state.config.storage.photos_url.trim_matches('/').to_string();
    let photos = ServeDir::new(&state.config.storage.photos_dir);
    let body_limit = DefaultBodyLimit::max(state.config.server.max_body_bytes);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Visitors
        .route(
            "/visitors",
            get(visitors::list_visitors).post(visitors::create_visitor),
        )
        .route(
            "/visitors/:serial",
            get(visitors::get_visitor).delete(visitors::delete_visitor),
        )
        .route("/visitors/:serial/timeout", put(visitors::timeout_visitor))
        // Keys
        .route("/keys", get(keys::list_keys).post(keys::create_key))
        .route("/keys/:serial", get(keys::get_key).delete(keys::delete_key))
        .route("/keys/:serial/return", put(keys::return_key))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .layer(body_limit)
        .with_state(state);

    let router = Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router());

    // Photo references are relative web paths under the configured prefix
    let router = if photos_prefix.is_empty() {
        router.fallback_service(photos)
    } else {
        router.nest_service(&format!("/{}", photos_prefix), photos)
    };

    router.layer(TraceLayer::new_for_http())
}
