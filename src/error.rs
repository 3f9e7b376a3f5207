//! Error types for translation operations.
//!
//! Boundary errors only: policy rejections are returned as data (error
//! message lists) by the validator and never surface through this type.

/// Main error type for translation operations.
///
/// Covers the failure modes that can occur at a tool boundary, such as a
/// malformed structured intent payload or an unknown index pattern. Normal
/// policy rejections are not errors; they are carried in
/// [`PolicyCheck`](crate::policy::PolicyCheck) and
/// [`QueryCheck`](crate::policy::QueryCheck).
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid request format or parameters
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Index pattern not present in the schema catalog
    #[error("Index pattern '{0}' not found")]
    UnknownIndexPattern(String),

    /// Hunting template lookup failure
    #[error("Hunting template '{0}' not found")]
    UnknownTemplate(String),

    /// Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TranslateError {
    /// Create an invalid request error with a custom message.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// Result type alias for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
