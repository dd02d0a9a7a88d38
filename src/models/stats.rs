//! Front desk statistics

use serde::Serialize;
use utoipa::ToSchema;

/// Counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of visitor entries
    pub total_visitors: usize,
    /// Visitors without a time out
    pub active_visitors: usize,
    /// Number of key entries
    pub total_keys: usize,
    /// Keys not yet returned
    pub active_keys: usize,
}
