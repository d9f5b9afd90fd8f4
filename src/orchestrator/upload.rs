//! Upload Validation
//!
//! Client-side shape check run before any CSV is sent. Unlike the result
//! parser this pass is CSV-aware: quoted fields with embedded commas or
//! newlines count as one field.

use std::path::Path;
use tracing::{debug, warn};

use crate::client::CsvUpload;
use crate::constants::{csv as contract, messages};
use crate::types::{Result, ValidationError, ValidationErrorKind};

/// Shape of an upload that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadShape {
    pub header: String,
    /// Data rows, header excluded
    pub rows: usize,
}

/// Declared content type for a file name, by extension
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => contract::CONTENT_TYPE,
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("tsv") => "text/tab-separated-values",
        _ => "application/octet-stream",
    }
}

impl CsvUpload {
    /// Read a file from disk, declaring its content type from the extension
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());

        Ok(Self::new(file_name, content_type_for(path), bytes))
    }
}

/// Validate the declared type and the single-column shape of an upload
pub fn validate_upload(upload: &CsvUpload) -> Result<UploadShape> {
    if upload.content_type != contract::CONTENT_TYPE {
        return Err(ValidationError::new(
            ValidationErrorKind::FileType,
            messages::INVALID_FILE_TYPE,
        )
        .with_comparison(contract::CONTENT_TYPE, upload.content_type.as_str())
        .into());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(upload.bytes.as_slice());

    let mut header: Option<String> = None;
    let mut rows = 0usize;

    for record in reader.byte_records() {
        let record = record.map_err(|e| {
            ValidationError::new(
                ValidationErrorKind::Format,
                format!("Could not read CSV file: {}", e),
            )
        })?;

        if record.len() != contract::UPLOAD_COLUMNS {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            debug!("Row on line {} has {} fields", line, record.len());
            return Err(column_count_error(record.len()));
        }

        match header {
            None => header = Some(String::from_utf8_lossy(&record[0]).trim().to_string()),
            Some(_) => rows += 1,
        }
    }

    let header = header.ok_or_else(|| column_count_error(0))?;

    if header != contract::EXPECTED_UPLOAD_HEADER {
        warn!(
            "Upload header is '{}'; the classifier expects '{}'",
            header,
            contract::EXPECTED_UPLOAD_HEADER
        );
    }

    Ok(UploadShape { header, rows })
}

fn column_count_error(found: usize) -> crate::types::ScanError {
    ValidationError::new(
        ValidationErrorKind::ColumnCount,
        messages::INVALID_COLUMN_COUNT,
    )
    .with_comparison(contract::UPLOAD_COLUMNS.to_string(), found.to_string())
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanError;

    fn csv_upload(body: &str) -> CsvUpload {
        CsvUpload::new("tweets.csv", "text/csv", body.as_bytes().to_vec())
    }

    fn kind(result: Result<UploadShape>) -> ValidationErrorKind {
        match result {
            Err(ScanError::Validation(v)) => v.kind,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_column_passes() {
        let shape = validate_upload(&csv_upload("Text\nhello\nworld\n")).unwrap();
        assert_eq!(shape.header, "Text");
        assert_eq!(shape.rows, 2);
    }

    #[test]
    fn test_quoted_commas_are_one_field() {
        let shape =
            validate_upload(&csv_upload("Text\n\"hello, you\"\n\"multi\nline, text\"\n")).unwrap();
        assert_eq!(shape.rows, 2);
    }

    #[test]
    fn test_two_columns_rejected() {
        let err = validate_upload(&csv_upload("Text,Label\nhello,1\n")).unwrap_err();
        assert_eq!(err.to_string(), "CSV file must have only one column for tweets.");
        assert_eq!(kind(Err(err)), ValidationErrorKind::ColumnCount);
    }

    #[test]
    fn test_later_wide_row_rejected() {
        let result = validate_upload(&csv_upload("Text\nhello\nbad,row\n"));
        assert_eq!(kind(result), ValidationErrorKind::ColumnCount);
    }

    #[test]
    fn test_empty_file_rejected() {
        assert_eq!(kind(validate_upload(&csv_upload(""))), ValidationErrorKind::ColumnCount);
    }

    #[test]
    fn test_header_only_passes() {
        let shape = validate_upload(&csv_upload("Text\n")).unwrap();
        assert_eq!(shape.rows, 0);
    }

    #[test]
    fn test_wrong_content_type_rejected() {
        let upload = CsvUpload::new("tweets.json", "application/json", b"[]".to_vec());
        let err = validate_upload(&upload).unwrap_err();
        assert_eq!(err.to_string(), "Please upload a valid CSV file.");
        assert_eq!(kind(Err(err)), ValidationErrorKind::FileType);
    }

    #[test]
    fn test_content_type_by_extension() {
        assert_eq!(content_type_for(Path::new("a/tweets.csv")), "text/csv");
        assert_eq!(content_type_for(Path::new("TWEETS.CSV")), "text/csv");
        assert_eq!(content_type_for(Path::new("notes.txt")), "text/plain");
        assert_eq!(
            content_type_for(Path::new("noext")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tweets.csv");
        std::fs::write(&path, "Text\nhi\n").unwrap();

        let upload = CsvUpload::from_path(&path).await.unwrap();
        assert_eq!(upload.file_name, "tweets.csv");
        assert_eq!(upload.content_type, "text/csv");
        assert_eq!(upload.bytes, b"Text\nhi\n");
    }
}
