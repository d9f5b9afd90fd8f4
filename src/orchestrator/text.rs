//! Single-Text Analysis
//!
//! [`TextVerdict`] is what the user sees after a text submission.
//! [`TextSession`] models the text box: it holds the current text and the
//! last verdict, and clears the verdict when the text is erased.

use std::fmt;

use super::AnalysisRequestOrchestrator;
use crate::constants::messages;
use crate::types::{Result, ValidationError, ValidationErrorKind};

/// Displayed outcome of a text analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVerdict {
    CyberbullyingDetected,
    NoCyberbullyingDetected,
    /// Transport failure; the request is not retried
    Error,
}

impl TextVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            Self::CyberbullyingDetected => messages::CYBERBULLYING_DETECTED,
            Self::NoCyberbullyingDetected => messages::NO_CYBERBULLYING_DETECTED,
            Self::Error => messages::TEXT_ANALYSIS_ERROR,
        }
    }

    pub fn from_prediction(positive: bool) -> Self {
        if positive {
            Self::CyberbullyingDetected
        } else {
            Self::NoCyberbullyingDetected
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for TextVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Text input state with its last verdict
#[derive(Debug, Clone, Default)]
pub struct TextSession {
    text: String,
    verdict: Option<TextVerdict>,
}

impl TextSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn verdict(&self) -> Option<TextVerdict> {
        self.verdict
    }

    /// Replace the text; erasing it clears any previous verdict
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.is_empty() {
            self.verdict = None;
        }
    }

    /// Submit the current text. Empty text is refused without a request.
    pub async fn submit(&mut self, orchestrator: &AnalysisRequestOrchestrator) -> Result<TextVerdict> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyInput,
                "Enter text for analysis",
            )
            .into());
        }

        let verdict = orchestrator.analyze_text(&self.text).await;
        self.verdict = Some(verdict);
        Ok(verdict)
    }
}
