//! Key log endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::key::{CreateKeyEntry, KeyEntry, ReturnKey},
};

use super::{ApiJson, DeleteResponse};

/// List all key entries in serial order
#[utoipa::path(
    get,
    path = "/keys",
    tag = "keys",
    responses(
        (status = 200, description = "Key log", body = Vec<KeyEntry>)
    )
)]
pub async fn list_keys(State(state): State<crate::AppState>) -> AppResult<Json<Vec<KeyEntry>>> {
    let keys = state.services.keys.list().await?;
    Ok(Json(keys))
}

/// Get a key entry by serial number
#[utoipa::path(
    get,
    path = "/keys/{serial}",
    tag = "keys",
    params(("serial" = String, Path, description = "Serial number (e.g. 0001)")),
    responses(
        (status = 200, description = "Key entry", body = KeyEntry),
        (status = 404, description = "Unknown serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_key(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<KeyEntry>> {
    let key = state.services.keys.get(&serial).await?;
    Ok(Json(key))
}

/// Register a key handover
#[utoipa::path(
    post,
    path = "/keys",
    tag = "keys",
    request_body = CreateKeyEntry,
    responses(
        (status = 201, description = "Key entry registered", body = KeyEntry),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_key(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateKeyEntry>,
) -> AppResult<(StatusCode, Json<KeyEntry>)> {
    let key = state.services.keys.create(&data).await?;
    Ok((StatusCode::CREATED, Json(key)))
}

/// Record a key's return time
#[utoipa::path(
    put,
    path = "/keys/{serial}/return",
    tag = "keys",
    params(("serial" = String, Path, description = "Serial number (e.g. 0001)")),
    request_body = ReturnKey,
    responses(
        (status = 200, description = "Key entry updated", body = KeyEntry),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_key(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
    ApiJson(data): ApiJson<ReturnKey>,
) -> AppResult<Json<KeyEntry>> {
    let key = state.services.keys.return_key(&serial, &data.time_returned).await?;
    Ok(Json(key))
}

/// Delete a key entry and renumber the log
#[utoipa::path(
    delete,
    path = "/keys/{serial}",
    tag = "keys",
    params(("serial" = String, Path, description = "Serial number (e.g. 0001)")),
    responses(
        (status = 200, description = "Key entry deleted", body = DeleteResponse),
        (status = 404, description = "Unknown serial number", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_key(
    State(state): State<crate::AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let remaining_count = state.services.keys.delete(&serial).await?;
    Ok(Json(DeleteResponse { remaining_count }))
}
