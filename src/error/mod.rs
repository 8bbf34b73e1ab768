//! Error handling for `care-metrics`.
//!
//! The aggregation and forecast engines never fail; they degrade to empty or
//! zeroed results. This error type covers the boundary around them: record
//! intake, strict parsing of user-supplied options and file I/O.

use std::io;

/// Specialized error type for record intake and I/O
#[derive(Debug, thiserror::Error)]
pub enum CareMetricsError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed intake validation
    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord {
        /// Identifier of the offending record
        id: String,
        /// What was wrong with it
        reason: String,
    },

    /// A record with the same identifier already exists
    #[error("Record '{0}' already exists")]
    DuplicateRecord(String),

    /// No record with the requested identifier
    #[error("Record '{0}' not found")]
    RecordNotFound(String),

    /// Unrecognised smoothing method name
    #[error("Unknown forecasting method '{0}' (expected 'moving-average' or 'exponential-smoothing')")]
    UnknownMethod(String),

    /// A date or timestamp string could not be parsed
    #[error("Date parsing error: {0}")]
    InvalidDate(String),
}

impl CareMetricsError {
    /// Create an invalid record error
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for fallible `care-metrics` operations
pub type Result<T> = std::result::Result<T, CareMetricsError>;
