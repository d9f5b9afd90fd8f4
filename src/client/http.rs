//! HTTP Classifier Client
//!
//! reqwest implementation of [`ClassifierClient`]. No retries: every failure
//! is terminal for that request.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

use super::{ClassifierClient, CsvUpload, PredictRequest, PredictResponse};
use crate::config::ServiceConfig;
use crate::constants::{csv, service};
use crate::types::{Result, ScanError};

/// Classifier service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    base_url: String,
    predict_url: Url,
    analyze_url: Url,
    root_url: Url,
    client: reqwest::Client,
}

impl HttpClassifier {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        // no timeout unless configured
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScanError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            predict_url: config.endpoint(&config.predict_path)?,
            analyze_url: config.endpoint(&config.analyze_path)?,
            root_url: config.endpoint("/")?,
            client,
        })
    }

    /// Turn a non-success response into a `ServiceStatus` error, preferring
    /// the service's JSON `error` field over the raw body.
    async fn status_error(endpoint: &Url, response: reqwest::Response) -> ScanError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        ScanError::ServiceStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl ClassifierClient for HttpClassifier {
    async fn predict(&self, text: &str) -> Result<PredictResponse> {
        info!("Requesting prediction ({} chars)", text.chars().count());
        let start = Instant::now();

        let response = self
            .client
            .post(self.predict_url.clone())
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| ScanError::transport(self.predict_url.as_str(), &e))?;

        if !response.status().is_success() {
            return Err(Self::status_error(&self.predict_url, response).await);
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| ScanError::transport(self.predict_url.as_str(), &e))?;

        debug!(
            "Prediction {} received in {:?}",
            body.prediction,
            start.elapsed()
        );
        Ok(body)
    }

    async fn analyze_csv(&self, upload: &CsvUpload) -> Result<Vec<u8>> {
        info!(
            "Uploading {} ({} bytes) for analysis",
            upload.file_name,
            upload.bytes.len()
        );
        let start = Instant::now();

        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(csv::CONTENT_TYPE)
            .map_err(|e| ScanError::transport(self.analyze_url.as_str(), &e))?;
        let form = Form::new().part(service::UPLOAD_FIELD, part);

        let response = self
            .client
            .post(self.analyze_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ScanError::transport(self.analyze_url.as_str(), &e))?;

        if !response.status().is_success() {
            return Err(Self::status_error(&self.analyze_url, response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScanError::transport(self.analyze_url.as_str(), &e))?;

        debug!(
            "Received {} labeled bytes in {:?}",
            bytes.len(),
            start.elapsed()
        );
        Ok(bytes.to_vec())
    }

    async fn health_check(&self) -> Result<String> {
        let response = self
            .client
            .get(self.root_url.clone())
            .send()
            .await
            .map_err(|e| ScanError::transport(self.root_url.as_str(), &e))?;

        if !response.status().is_success() {
            return Err(Self::status_error(&self.root_url, response).await);
        }

        response
            .text()
            .await
            .map_err(|e| ScanError::transport(self.root_url.as_str(), &e))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
