//! CLI Common Utilities
//!
//! Session context shared by command handlers: configuration plus the
//! per-session artifact registry and statistics store.

use std::sync::Arc;

use crate::artifact::{ArtifactRegistry, SharedRegistry};
use crate::client::{HttpClassifier, SharedClient};
use crate::config::{Config, ConfigLoader, ConfigOverrides};
use crate::orchestrator::AnalysisRequestOrchestrator;
use crate::store::{SharedStatisticsStore, SharedStore};
use crate::types::Result;

use super::ui::Output;

/// Command execution context
///
/// One per process run. The registry and store live exactly as long as the
/// session.
pub struct CommandContext {
    pub config: Config,
    pub registry: SharedRegistry,
    pub store: SharedStore,
    pub output: Output,
}

impl CommandContext {
    /// Load configuration and create fresh session state
    pub fn load(overrides: &ConfigOverrides, quiet: bool) -> Result<Self> {
        let config = ConfigLoader::load_with(overrides)?;
        Ok(Self::with_config(config, quiet))
    }

    pub fn with_config(config: Config, quiet: bool) -> Self {
        Self {
            config,
            registry: ArtifactRegistry::shared(),
            store: SharedStatisticsStore::shared(),
            output: if quiet { Output::quiet() } else { Output::new() },
        }
    }

    /// HTTP client for the configured classifier
    pub fn client(&self) -> Result<SharedClient> {
        Ok(Arc::new(HttpClassifier::new(&self.config.service)?))
    }

    pub fn orchestrator(&self) -> Result<AnalysisRequestOrchestrator> {
        Ok(AnalysisRequestOrchestrator::new(
            self.client()?,
            Arc::clone(&self.registry),
            self.config.results.download_name.clone(),
        ))
    }

    /// Store handed to the results view, if publishing is enabled
    pub fn results_store(&self) -> Option<SharedStore> {
        self.config
            .results
            .publish_statistics
            .then(|| Arc::clone(&self.store))
    }
}
