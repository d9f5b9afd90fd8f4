//! Shared Statistics Store
//!
//! Session-lifetime slot for the most recent [`AggregateStatistics`].
//! Constructed once per session and passed explicitly to the views that use
//! it. Last writer wins; there is no merge and no reset.

use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::pipeline::AggregateStatistics;

#[derive(Debug, Default)]
pub struct SharedStatisticsStore {
    latest: RwLock<Option<AggregateStatistics>>,
}

pub type SharedStore = Arc<SharedStatisticsStore>;

impl SharedStatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Latest statistics, or `None` if nothing has been written yet
    pub fn get(&self) -> Option<AggregateStatistics> {
        // a poisoned lock still holds a complete Copy value
        *self.latest.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Overwrite the stored statistics
    pub fn set(&self, stats: AggregateStatistics) {
        debug!("Publishing statistics (total {})", stats.total);
        *self.latest.write().unwrap_or_else(|e| e.into_inner()) = Some(stats);
    }
}
