//! Unified Error Type System
//!
//! Centralized error types for the whole client.
//! Every failure is classified so callers can decide how to degrade it.
//!
//! ## Error Categories
//!
//! - **InputValidation**: bad upload (file type, column shape), shown to the user, nothing sent
//! - **Transport**: network failure or non-success status from the classifier
//! - **Artifact**: unknown or already released result artifact
//! - **Config**: invalid configuration values
//! - **Internal**: local I/O and serialization failures
//!
//! Result-CSV parse tolerance never produces an error; malformed rows are
//! absorbed by the parser.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Error categories for routing failures to the right display state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected before any request was made
    InputValidation,
    /// Classifier unreachable or answered with a failure
    Transport,
    /// Artifact reference could not be resolved
    Artifact,
    /// Configuration is invalid
    Config,
    /// Local failure unrelated to the classifier
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputValidation => write!(f, "INPUT_VALIDATION"),
            Self::Transport => write!(f, "TRANSPORT"),
            Self::Artifact => write!(f, "ARTIFACT"),
            Self::Config => write!(f, "CONFIG"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

impl ErrorCategory {
    /// Whether the message should be shown to the user verbatim
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::InputValidation | Self::Config)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structured validation error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What validation failed
    pub kind: ValidationErrorKind,
    /// User-facing message
    pub message: String,
    /// Expected value or format
    pub expected: Option<String>,
    /// Actual value received
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Add expected/actual values
    pub fn with_comparison(
        mut self,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }
}

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Declared content type is not CSV
    FileType,
    /// Upload has no records or more than one column
    ColumnCount,
    /// Upload could not be read as CSV at all
    Format,
    /// Empty text submitted
    EmptyInput,
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ScanError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Classifier Errors
    // -------------------------------------------------------------------------
    /// Request never produced a response
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// Response arrived with a non-success status
    #[error("Classifier returned {status} for {endpoint}: {message}")]
    ServiceStatus {
        endpoint: String,
        status: u16,
        message: String,
    },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Validation(ValidationError),

    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Artifact already released: {0}")]
    ArtifactReleased(String),

    #[error("Invalid route: {0}")]
    Route(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<ValidationError> for ScanError {
    fn from(err: ValidationError) -> Self {
        ScanError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    /// Create a transport error from a reqwest failure
    pub fn transport(endpoint: impl Into<String>, err: &reqwest::Error) -> Self {
        let endpoint = endpoint.into();
        let message = if err.is_connect() {
            format!("could not connect to classifier ({})", err)
        } else if err.is_timeout() {
            format!("request timed out ({})", err)
        } else {
            err.to_string()
        };
        Self::Transport { endpoint, message }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::InputValidation,
            Self::Transport { .. } | Self::ServiceStatus { .. } => ErrorCategory::Transport,
            Self::ArtifactNotFound(_) | Self::ArtifactReleased(_) | Self::Route(_) => {
                ErrorCategory::Artifact
            }
            Self::Config(_) => ErrorCategory::Config,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Borrow the validation payload, if this is an input-validation error
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(v) => Some(v),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::InputValidation.to_string(), "INPUT_VALIDATION");
        assert_eq!(ErrorCategory::Transport.to_string(), "TRANSPORT");
        assert_eq!(ErrorCategory::Artifact.to_string(), "ARTIFACT");
    }

    #[test]
    fn test_user_facing_categories() {
        assert!(ErrorCategory::InputValidation.is_user_facing());
        assert!(ErrorCategory::Config.is_user_facing());
        assert!(!ErrorCategory::Transport.is_user_facing());
        assert!(!ErrorCategory::Artifact.is_user_facing());
    }

    #[test]
    fn test_validation_display_is_message_only() {
        let err = ScanError::from(
            ValidationError::new(ValidationErrorKind::FileType, "Please upload a valid CSV file.")
                .with_comparison("text/csv", "application/json"),
        );
        assert_eq!(err.to_string(), "Please upload a valid CSV file.");
        assert_eq!(err.category(), ErrorCategory::InputValidation);

        let v = err.as_validation().unwrap();
        assert_eq!(v.expected.as_deref(), Some("text/csv"));
        assert_eq!(v.actual.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_transport_categories() {
        let err = ScanError::ServiceStatus {
            endpoint: "/analyze_csv".to_string(),
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert_eq!(
            err.to_string(),
            "Classifier returned 500 for /analyze_csv: boom"
        );
    }

    #[test]
    fn test_artifact_category() {
        let err = ScanError::ArtifactReleased("artifact://x".to_string());
        assert_eq!(err.category(), ErrorCategory::Artifact);
        assert!(err.as_validation().is_none());
    }
}
