//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, keys, stats, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Front Desk API",
        version = "1.0.0",
        description = "Visitor and key log REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Visitors
        visitors::list_visitors,
        visitors::get_visitor,
        visitors::create_visitor,
        visitors::timeout_visitor,
        visitors::delete_visitor,
        // Keys
        keys::list_keys,
        keys::get_key,
        keys::create_key,
        keys::return_key,
        keys::delete_key,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Visitors
            crate::models::visitor::Visitor,
            crate::models::visitor::CreateVisitor,
            crate::models::visitor::TimeoutVisitor,
            // Keys
            crate::models::key::KeyEntry,
            crate::models::key::CreateKeyEntry,
            crate::models::key::ReturnKey,
            // Shared
            crate::api::DeleteResponse,
            crate::models::stats::Stats,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "visitors", description = "Visitor log"),
        (name = "keys", description = "Key log"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
