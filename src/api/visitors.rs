//! Visitor log endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::visitor::{CreateVisitor, TimeoutVisitor, Visitor},
};

use super::{ApiJson, DeleteResponse};

/// List all visitors in serial order
#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    responses(
        (status = 200, description = "Visitor log", body = Vec<Visitor>)
    )
)]
pub async fn list_visitors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Visitor>>> {
    let visitors = state.services.visitors.list().await?;
    Ok(Json(visitors))
}

/// Get a visitor by serial number
#[utoipa::path(
    get,
    path = "/visitors/{serial}",
    tag = "visitors",
    params(("serial" = String, Path, description = "Serial number (e.g. 0001)")),
    responses(
        (status = 200, description = "Visitor", body = Visitor),
        (status = 404, description = "Unknown serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_visitor(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<Visitor>> {
    let visitor = state.services.visitors.get(&serial).await?;
    Ok(Json(visitor))
}

/// Register a visitor
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    request_body = CreateVisitor,
    responses(
        (status = 201, description = "Visitor registered", body = Visitor),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_visitor(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateVisitor>,
) -> AppResult<(StatusCode, Json<Visitor>)> {
    let visitor = state.services.visitors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(visitor)))
}

/// Record a visitor's time out
#[utoipa::path(
    put,
    path = "/visitors/{serial}/timeout",
    tag = "visitors",
    params(("serial" = String, Path, description = "Serial number (e.g. 0001)")),
    request_body = TimeoutVisitor,
    responses(
        (status = 200, description = "Visitor updated", body = Visitor),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn timeout_visitor(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
    ApiJson(data): ApiJson<TimeoutVisitor>,
) -> AppResult<Json<Visitor>> {
    let visitor = state.services.visitors.timeout(&serial, &data.time_out).await?;
    Ok(Json(visitor))
}

/// Delete a visitor and renumber the log
#[utoipa::path(
    delete,
    path = "/visitors/{serial}",
    tag = "visitors",
    params(("serial" = String, Path, description = "Serial number (e.g. 0001)")),
    responses(
        (status = 200, description = "Visitor deleted", body = DeleteResponse),
        (status = 404, description = "Unknown serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_visitor(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let remaining_count = state.services.visitors.delete(&serial).await?;
    Ok(Json(DeleteResponse { remaining_count }))
}
