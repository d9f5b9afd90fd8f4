pub mod error;

pub use error::{ErrorCategory, Result, ScanError, ValidationError, ValidationErrorKind};
