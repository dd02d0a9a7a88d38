//! Statistics service

use crate::{
    error::AppResult,
    models::{Record, Stats},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Totals and active counts of both logs
    pub async fn get_stats(&self) -> AppResult<Stats> {
        let visitors = self.repository.visitors.list().await?;
        let keys = self.repository.keys.list().await?;

        Ok(Stats {
            total_visitors: visitors.len(),
            active_visitors: visitors.iter().filter(|v| v.is_active()).count(),
            total_keys: keys.len(),
            active_keys: keys.iter().filter(|k| k.is_active()).count(),
        })
    }
}
