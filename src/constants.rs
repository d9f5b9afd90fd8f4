//! Global Constants
//!
//! Centralized constants for the classifier contract, chart palette and
//! user-facing messages. All magic values should be defined here.

/// Classifier service constants
pub mod service {
    /// Default service base URL
    pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

    /// Single-text prediction endpoint
    pub const PREDICT_PATH: &str = "/predict";

    /// CSV analysis endpoint
    pub const ANALYZE_CSV_PATH: &str = "/analyze_csv";

    /// Multipart field name carrying the uploaded file
    pub const UPLOAD_FIELD: &str = "file";

    /// Numeric prediction the service uses for a positive label
    pub const POSITIVE_PREDICTION: i64 = 1;
}

/// CSV contract constants
pub mod csv {
    /// Declared content type accepted for uploads
    pub const CONTENT_TYPE: &str = "text/csv";

    /// Result CSV field delimiter
    pub const DELIMITER: char = ',';

    /// Zero-based index of the label column in the result CSV
    pub const LABEL_COLUMN: usize = 1;

    /// Literal label for a positive (cyberbullying) row
    pub const POSITIVE_LABEL: &str = "1";

    /// Literal label for a negative (non-cyberbullying) row
    pub const NEGATIVE_LABEL: &str = "0";

    /// Header the service expects on the uploaded column
    pub const EXPECTED_UPLOAD_HEADER: &str = "Text";

    /// Number of populated columns an upload must have
    pub const UPLOAD_COLUMNS: usize = 1;
}

/// Chart constants
pub mod chart {
    pub const POSITIVE_CATEGORY: &str = "Cyberbullying";
    pub const NEGATIVE_CATEGORY: &str = "Non-Cyberbullying";

    /// Dataset label shown on the bar chart
    pub const BAR_DATASET_LABEL: &str = "Count";

    /// Solid color for the positive category
    pub const POSITIVE_COLOR: &str = "#00b894";

    /// Neutral color for the negative category
    pub const NEGATIVE_COLOR: &str = "#ffffff";

    /// Hover variant of the neutral color
    pub const NEGATIVE_HOVER_COLOR: &str = "#dfe6e9";
}

/// Results view constants
pub mod results {
    /// Route path of the results view
    pub const ROUTE_PATH: &str = "/results";

    /// Query parameter carrying the artifact reference URL
    pub const FILE_URL_PARAM: &str = "fileUrl";

    /// URL scheme of in-process artifact references
    pub const ARTIFACT_SCHEME: &str = "artifact";

    /// Released artifact handles remembered for error reporting
    pub const RELEASED_HISTORY: usize = 256;

    /// Default file name offered for download
    pub const DEFAULT_DOWNLOAD_NAME: &str = "analyzed_results.csv";
}

/// User-facing messages
pub mod messages {
    pub const CYBERBULLYING_DETECTED: &str = "Cyberbullying Detected";
    pub const NO_CYBERBULLYING_DETECTED: &str = "No Cyberbullying Detected";
    pub const TEXT_ANALYSIS_ERROR: &str = "Error analyzing text";
    pub const INVALID_FILE_TYPE: &str = "Please upload a valid CSV file.";
    pub const INVALID_COLUMN_COUNT: &str = "CSV file must have only one column for tweets.";
    pub const NO_RESULTS: &str = "No results available.";
    pub const LABEL_LEGEND: &str =
        "The analysis is labeled with 1 for cyberbullying and 0 for non-cyberbullying.";
}
