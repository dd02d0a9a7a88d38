//! Business logic services

pub mod keys;
pub mod stats;
pub mod validation;
pub mod visitors;

use std::sync::Arc;

use crate::{clock::Clock, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub visitors: visitors::VisitorsService,
    pub keys: keys::KeysService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository and date source
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self {
            visitors: visitors::VisitorsService::new(repository.clone(), clock.clone()),
            keys: keys::KeysService::new(repository.clone(), clock),
            stats: stats::StatsService::new(repository),
        }
    }
}
