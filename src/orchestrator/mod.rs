//! Analysis Request Orchestration
//!
//! Two independent flows against the classifier:
//!
//! - **Text**: predict → [`TextVerdict`]; transport failures become
//!   [`TextVerdict::Error`] instead of propagating.
//! - **CSV**: validate → upload → register artifact → results [`Route`].
//!
//! Flows are plain `async fn`s. Nothing serializes concurrent submissions and
//! nothing cancels them; when two are in flight the last to resolve wins.

mod text;
mod upload;

pub use text::{TextSession, TextVerdict};
pub use upload::{UploadShape, content_type_for, validate_upload};

use tracing::{error, info};

use crate::artifact::{Route, SharedRegistry};
use crate::client::{CsvUpload, SharedClient};
use crate::types::{Result, ScanError};

/// Outcome of a CSV submission as seen by the upload view
#[derive(Debug)]
pub enum CsvSubmission {
    /// Analysis succeeded; navigate here
    Navigate(Route),
    /// Rejected before upload; show this message
    Rejected(String),
    /// Transport failure, already logged; stay on the upload view
    Failed(ScanError),
}

impl CsvSubmission {
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Navigate(route) => Some(route),
            _ => None,
        }
    }
}

pub struct AnalysisRequestOrchestrator {
    client: SharedClient,
    registry: SharedRegistry,
    download_name: String,
}

impl AnalysisRequestOrchestrator {
    pub fn new(
        client: SharedClient,
        registry: SharedRegistry,
        download_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            registry,
            download_name: download_name.into(),
        }
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    // =========================================================================
    // Text Flow
    // =========================================================================

    /// Classify one text. Never fails; errors are logged and shown as
    /// [`TextVerdict::Error`].
    pub async fn analyze_text(&self, text: &str) -> TextVerdict {
        match self.client.predict(text).await {
            Ok(response) => TextVerdict::from_prediction(response.is_positive()),
            Err(e) => {
                error!("Error analyzing text: {}", e);
                TextVerdict::Error
            }
        }
    }

    // =========================================================================
    // CSV Flow
    // =========================================================================

    /// Validate, upload and register the labeled result.
    ///
    /// Validation failures return before any request is made.
    pub async fn analyze_csv(&self, upload: &CsvUpload) -> Result<Route> {
        let shape = validate_upload(upload)?;
        info!(
            "Upload {} passed validation ({} rows)",
            upload.file_name, shape.rows
        );

        let labeled = self.client.analyze_csv(upload).await?;
        let handoff = self.registry.create(labeled, self.download_name.clone());
        info!("Analysis complete, artifact {}", handoff.url());

        Ok(handoff.into_route())
    }

    /// [`analyze_csv`](Self::analyze_csv) mapped to what the upload view shows
    pub async fn submit_csv(&self, upload: &CsvUpload) -> CsvSubmission {
        match self.analyze_csv(upload).await {
            Ok(route) => CsvSubmission::Navigate(route),
            Err(ScanError::Validation(v)) => CsvSubmission::Rejected(v.message),
            Err(e) => {
                error!("Error uploading CSV to {}: {}", self.client.base_url(), e);
                CsvSubmission::Failed(e)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::artifact::ArtifactRegistry;
    use crate::client::{ClassifierClient, PredictResponse};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// In-process classifier that labels every row with a fixed value
    pub(crate) struct MockClassifier {
        pub prediction: serde_json::Value,
        pub label: &'static str,
        pub fail: bool,
        pub calls: AtomicU32,
    }

    impl MockClassifier {
        pub(crate) fn new(prediction: serde_json::Value) -> Self {
            Self {
                prediction,
                label: "1",
                fail: false,
                calls: AtomicU32::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(serde_json::Value::Null)
            }
        }

        pub(crate) fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }

        fn transport_error(&self) -> ScanError {
            ScanError::Transport {
                endpoint: "mock".to_string(),
                message: "connection refused".to_string(),
            }
        }
    }

    #[async_trait]
    impl ClassifierClient for MockClassifier {
        async fn predict(&self, _text: &str) -> Result<PredictResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(self.transport_error());
            }
            Ok(PredictResponse {
                prediction: self.prediction.clone(),
            })
        }

        async fn analyze_csv(&self, upload: &CsvUpload) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(self.transport_error());
            }
            let body = String::from_utf8_lossy(&upload.bytes);
            let mut out = String::from("Text,CB_Label\n");
            for line in body.lines().skip(1).filter(|l| !l.is_empty()) {
                out.push_str(&format!("{},{}\n", line, self.label));
            }
            Ok(out.into_bytes())
        }

        async fn health_check(&self) -> Result<String> {
            Ok("Welcome".to_string())
        }

        fn base_url(&self) -> &str {
            "mock://classifier"
        }
    }

    fn orchestrator(mock: Arc<MockClassifier>) -> AnalysisRequestOrchestrator {
        AnalysisRequestOrchestrator::new(mock, ArtifactRegistry::shared(), "analyzed_results.csv")
    }

    #[tokio::test]
    async fn test_text_prediction_mapping() {
        let positive = orchestrator(Arc::new(MockClassifier::new(serde_json::json!(1))));
        assert_eq!(
            positive.analyze_text("x").await.message(),
            "Cyberbullying Detected"
        );

        let negative = orchestrator(Arc::new(MockClassifier::new(serde_json::json!(0))));
        assert_eq!(
            negative.analyze_text("x").await.message(),
            "No Cyberbullying Detected"
        );

        let other = orchestrator(Arc::new(MockClassifier::new(serde_json::json!(7))));
        assert_eq!(
            other.analyze_text("x").await,
            TextVerdict::NoCyberbullyingDetected
        );
    }

    #[tokio::test]
    async fn test_text_transport_failure_is_error_string() {
        let orch = orchestrator(Arc::new(MockClassifier::failing()));
        let verdict = orch.analyze_text("x").await;
        assert_eq!(verdict.message(), "Error analyzing text");
    }

    #[tokio::test]
    async fn test_session_refuses_empty_text() {
        let mock = Arc::new(MockClassifier::new(serde_json::json!(1)));
        let orch = orchestrator(Arc::clone(&mock));
        let mut session = TextSession::new();

        session.set_text("   ");
        assert!(session.submit(&orch).await.is_err());
        assert_eq!(mock.calls(), 0);

        session.set_text("go away");
        let verdict = session.submit(&orch).await.unwrap();
        assert_eq!(verdict, TextVerdict::CyberbullyingDetected);
        assert_eq!(session.verdict(), Some(verdict));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_two_column_csv_never_uploaded() {
        let mock = Arc::new(MockClassifier::new(serde_json::json!(1)));
        let orch = orchestrator(Arc::clone(&mock));
        let upload = CsvUpload::new("t.csv", "text/csv", b"Text,Other\na,b\n".to_vec());

        match orch.submit_csv(&upload).await {
            CsvSubmission::Rejected(msg) => {
                assert_eq!(msg, "CSV file must have only one column for tweets.")
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(mock.calls(), 0);
        assert_eq!(orch.registry().live_count(), 0);
    }

    #[tokio::test]
    async fn test_wrong_type_never_uploaded() {
        let mock = Arc::new(MockClassifier::new(serde_json::json!(1)));
        let orch = orchestrator(Arc::clone(&mock));
        let upload = CsvUpload::new("t.txt", "text/plain", b"Text\na\n".to_vec());

        let submission = orch.submit_csv(&upload).await;
        assert!(matches!(submission, CsvSubmission::Rejected(ref m) if m == "Please upload a valid CSV file."));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_csv_success_navigates_with_artifact() {
        let mock = Arc::new(MockClassifier::new(serde_json::json!(1)));
        let orch = orchestrator(Arc::clone(&mock));
        let upload = CsvUpload::new("t.csv", "text/csv", b"Text\nhello\nworld\n".to_vec());

        let submission = orch.submit_csv(&upload).await;
        let route = submission.route().cloned().expect("navigation");
        let url = route.file_url().expect("file url");

        let bytes = orch.registry().fetch(url).await.unwrap();
        assert_eq!(&bytes[..], b"Text,CB_Label\nhello,1\nworld,1\n");
        assert_eq!(
            orch.registry().get(url).unwrap().download_name(),
            "analyzed_results.csv"
        );
    }

    #[tokio::test]
    async fn test_csv_transport_failure_does_not_navigate() {
        let mock = Arc::new(MockClassifier::failing());
        let orch = orchestrator(Arc::clone(&mock));
        let upload = CsvUpload::new("t.csv", "text/csv", b"Text\nhello\n".to_vec());

        let submission = orch.submit_csv(&upload).await;
        assert!(matches!(submission, CsvSubmission::Failed(_)));
        assert!(submission.route().is_none());
        assert_eq!(mock.calls(), 1);
        assert_eq!(orch.registry().live_count(), 0);
    }
}
