//! Results View Model
//!
//! Mounted from a [`Route`]. Reads the `fileUrl` reference, fetches the
//! artifact bytes and runs parser → aggregator → chart adapter. Owns the
//! artifact from then on and releases it on teardown.
//!
//! A missing reference renders the "no results" state. A failed fetch is
//! logged and leaves the statistics at zero; the view still mounts.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::artifact::{Route, SharedRegistry};
use crate::pipeline::{AggregateStatistics, ChartData, summarize};
use crate::store::SharedStore;
use crate::types::{Result, ScanError};

pub struct ResultsViewModel {
    registry: SharedRegistry,
    store: Option<SharedStore>,
    file_url: Option<String>,
    statistics: AggregateStatistics,
    charts: ChartData,
    unrecognized: u64,
    analyzed_at: Option<DateTime<Utc>>,
    released: bool,
}

impl ResultsViewModel {
    /// Mount the view for a route.
    ///
    /// When `store` is given, computed statistics are also published there.
    pub async fn mount(route: &Route, registry: SharedRegistry, store: Option<SharedStore>) -> Self {
        let mut view = Self {
            registry,
            store,
            file_url: route.file_url().map(String::from),
            statistics: AggregateStatistics::default(),
            charts: ChartData::default(),
            unrecognized: 0,
            analyzed_at: None,
            released: false,
        };

        if let Some(url) = view.file_url.clone() {
            view.load(&url).await;
        } else {
            debug!("Results view mounted without fileUrl");
        }

        view
    }

    async fn load(&mut self, url: &str) {
        let artifact = match self.registry.get(url) {
            Ok(artifact) => artifact,
            Err(e) => {
                error!("Error fetching CSV data: {}", e);
                return;
            }
        };
        let bytes = match self.registry.fetch(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Error fetching CSV data: {}", e);
                return;
            }
        };

        let summary = summarize(&String::from_utf8_lossy(&bytes));
        self.analyzed_at = Some(artifact.created_at());
        self.unrecognized = summary.unrecognized;
        self.statistics = summary.statistics;
        self.charts = summary.charts;
        self.publish();

        info!(
            "Loaded {} labels ({} unrecognized rows)",
            self.statistics.total, self.unrecognized
        );
    }

    /// Replace the statistics; chart data is recomputed from them
    pub fn set_statistics(&mut self, stats: AggregateStatistics) {
        self.statistics = stats;
        self.charts = ChartData::from_statistics(&stats);
        self.publish();
    }

    fn publish(&self) {
        if let Some(store) = &self.store {
            store.set(self.statistics);
        }
    }

    /// Whether a result reference was handed to this view
    pub fn has_results(&self) -> bool {
        self.file_url.is_some()
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    pub fn statistics(&self) -> &AggregateStatistics {
        &self.statistics
    }

    pub fn charts(&self) -> &ChartData {
        &self.charts
    }

    /// Rows that were neither "1" nor "0" (blank trailing lines included)
    pub fn unrecognized(&self) -> u64 {
        self.unrecognized
    }

    /// When the classifier returned the labeled CSV; `None` if nothing loaded
    pub fn analyzed_at(&self) -> Option<DateTime<Utc>> {
        self.analyzed_at
    }

    /// Write the labeled CSV into `dir`, read through the same reference URL
    pub async fn download_to(&self, dir: &Path) -> Result<PathBuf> {
        let url = self
            .file_url
            .as_deref()
            .ok_or_else(|| ScanError::ArtifactNotFound("no result reference".to_string()))?;

        let artifact = self.registry.get(url)?;
        let bytes = self.registry.fetch(url).await?;
        let path = dir.join(artifact.download_name());

        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, &bytes[..]).await?;
        info!("Saved {} ({} bytes)", path.display(), bytes.len());

        Ok(path)
    }

    /// Release the artifact. Returns true if this call released it.
    pub fn teardown(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;

        match self.file_url.as_deref().map(|url| self.registry.release_url(url)) {
            Some(Ok(released)) => released,
            Some(Err(e)) => {
                debug!("Nothing to release: {}", e);
                false
            }
            None => false,
        }
    }
}

impl Drop for ResultsViewModel {
    fn drop(&mut self) {
        self.release();
    }
}
