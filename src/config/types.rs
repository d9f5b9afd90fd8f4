//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global and project level configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::constants::{results, service};
use crate::types::{Result, ScanError};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Classifier service settings
    pub service: ServiceConfig,

    /// Results view settings
    pub results: ResultsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            service: ServiceConfig::default(),
            results: ResultsConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ScanError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.service.base_url).map_err(|e| {
            ScanError::Config(format!(
                "Invalid service base_url '{}': {}",
                self.service.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScanError::Config(format!(
                "Service base_url must use http or https scheme, got: {}",
                url.scheme()
            )));
        }

        for (name, path) in [
            ("predict_path", &self.service.predict_path),
            ("analyze_path", &self.service.analyze_path),
        ] {
            if !path.starts_with('/') {
                return Err(ScanError::Config(format!(
                    "Service {} must start with '/', got '{}'",
                    name, path
                )));
            }
        }

        if self.service.timeout_secs == Some(0) {
            return Err(ScanError::Config(
                "Service timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        if !self.results.download_name.ends_with(".csv") {
            return Err(ScanError::Config(format!(
                "Results download_name must end with .csv, got '{}'",
                self.results.download_name
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Service Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the classifier service
    pub base_url: String,

    /// Path of the single-text prediction endpoint
    pub predict_path: String,

    /// Path of the CSV analysis endpoint
    pub analyze_path: String,

    /// Request timeout; unset means the transport default (no timeout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: service::DEFAULT_BASE_URL.to_string(),
            predict_path: service::PREDICT_PATH.to_string(),
            analyze_path: service::ANALYZE_CSV_PATH.to_string(),
            timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
            .map_err(|e| ScanError::Config(format!("Invalid endpoint '{}{}': {}", base, path, e)))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// =============================================================================
// Results Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    /// File name offered when downloading the labeled CSV
    pub download_name: String,

    /// Publish each computed statistics object to the shared store
    pub publish_statistics: bool,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            download_name: results::DEFAULT_DOWNLOAD_NAME.to_string(),
            publish_statistics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service.base_url, "http://localhost:5000");
        assert!(config.service.timeout().is_none());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let mut service = ServiceConfig::default();
        service.base_url = "http://classifier.local:8080/".to_string();
        let url = service.endpoint("/predict").unwrap();
        assert_eq!(url.as_str(), "http://classifier.local:8080/predict");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.service.base_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(ScanError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.service.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        config.service.timeout_secs = Some(15);
        assert!(config.validate().is_ok());
        assert_eq!(config.service.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_rejects_relative_endpoint_path() {
        let mut config = Config::default();
        config.service.predict_path = "predict".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_csv_download_name() {
        let mut config = Config::default();
        config.results.download_name = "results.txt".to_string();
        assert!(config.validate().is_err());
    }
}
