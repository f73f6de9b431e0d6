//! Error types for the CareFinder triage pipeline.
//!
//! Evaluation itself cannot fail. Errors only arise before it: a form that
//! is missing an answer, or a rule file that cannot be loaded.

use thiserror::Error;

/// The unified error type for CareFinder.
#[derive(Debug, Error)]
pub enum CareFinderError {
    /// A required answer is missing or could not be understood.
    ///
    /// Front ends must block evaluation and re-prompt. A missing severity or
    /// duration is never replaced with a default.
    #[error("invalid symptom report: {field}: {reason}")]
    InvalidReport { field: String, reason: String },

    /// A rule file is unreadable, malformed, or fails validation.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl CareFinderError {
    /// Shorthand for an `InvalidReport` naming a missing field.
    pub fn missing(field: &str) -> Self {
        CareFinderError::InvalidReport {
            field: field.to_string(),
            reason: "an answer is required".to_string(),
        }
    }
}

/// Convenience alias used throughout the CareFinder crates.
pub type CareFinderResult<T> = Result<T, CareFinderError>;
