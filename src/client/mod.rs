//! Classifier Service Client
//!
//! Defines the [`ClassifierClient`] trait the orchestrator talks to.
//! [`HttpClassifier`] is the reqwest-backed implementation; tests substitute
//! in-process mocks.
//!
//! ## Endpoints
//!
//! - `POST /predict` with `{ "text": ... }` → `{ "prediction": 0 | 1 }`
//! - `POST /analyze_csv` multipart `file` → labeled CSV bytes
//! - `GET /` → welcome string

mod http;

pub use http::HttpClassifier;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::constants::service::POSITIVE_PREDICTION;
use crate::types::Result;

/// File submitted to the CSV endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvUpload {
    /// File name sent with the multipart part
    pub file_name: String,
    /// Declared content type
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Body of the predict request
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// Body of the predict response.
///
/// `prediction` is kept as raw JSON: only the number 1 counts as positive,
/// every other value (0, strings, null) is negative.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Value,
}

impl PredictResponse {
    pub fn is_positive(&self) -> bool {
        self.prediction.as_f64() == Some(POSITIVE_PREDICTION as f64)
    }
}

#[async_trait]
pub trait ClassifierClient: Send + Sync {
    /// Classify a single text
    async fn predict(&self, text: &str) -> Result<PredictResponse>;

    /// Upload a CSV and receive the labeled CSV bytes
    async fn analyze_csv(&self, upload: &CsvUpload) -> Result<Vec<u8>>;

    /// Check that the service answers; returns its greeting
    async fn health_check(&self) -> Result<String>;

    /// Service location for logging
    fn base_url(&self) -> &str;
}

pub type SharedClient = Arc<dyn ClassifierClient>;
