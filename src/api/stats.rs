//! Statistics endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Stats};

/// Visitor and key counters
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Front desk statistics", body = Stats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<Stats>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
