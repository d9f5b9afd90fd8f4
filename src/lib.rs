//! bullyscan - Cyberbullying Detection Client
//!
//! Submits free text or single-column CSV files to a remote text
//! classification service, then turns the labeled CSV it returns into
//! aggregate statistics and chart-ready data.
//!
//! ## Flow
//!
//! 1. [`orchestrator`] validates input and talks to the service through a
//!    [`client::ClassifierClient`]
//! 2. The labeled CSV is registered as an in-memory artifact ([`artifact`])
//!    and the caller is handed a [`Route`] carrying its reference
//! 3. [`results::ResultsViewModel`] mounts on that route, fetches the
//!    artifact and derives statistics via [`pipeline`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use bullyscan::{ArtifactRegistry, ConfigLoader, HttpClassifier};
//! use bullyscan::orchestrator::{AnalysisRequestOrchestrator, CsvSubmission};
//!
//! let config = ConfigLoader::load()?;
//! let client = Arc::new(HttpClassifier::new(&config.service)?);
//! let orchestrator = AnalysisRequestOrchestrator::new(
//!     client,
//!     ArtifactRegistry::shared(),
//!     config.results.download_name,
//! );
//! if let CsvSubmission::Navigate(route) = orchestrator.submit_csv(&upload).await {
//!     let view = ResultsViewModel::mount(&route, orchestrator.registry().clone(), None).await;
//!     println!("{:?}", view.statistics());
//! }
//! ```

pub mod artifact;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod orchestrator;
pub mod pipeline;
pub mod results;
pub mod store;
pub mod types;

// Configuration
pub use config::{Config, ConfigLoader, ConfigOverrides};

// Error Types
pub use types::error::{ErrorCategory, Result, ScanError, ValidationError};

// Service
pub use client::{ClassifierClient, CsvUpload, HttpClassifier, SharedClient};

// Session state
pub use artifact::{ArtifactRegistry, Route, SharedRegistry};
pub use store::{SharedStatisticsStore, SharedStore};

// Analysis
pub use orchestrator::{AnalysisRequestOrchestrator, CsvSubmission, TextSession, TextVerdict};
pub use pipeline::{AggregateStatistics, ChartData, LabelAggregator, Summary, parse_labels, summarize};
pub use results::ResultsViewModel;
