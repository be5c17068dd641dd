//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Sparta
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SpartaError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SpartaError {
    /// Stable label suitable for structured logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Sparta operations
pub type Result<T> = std::result::Result<T, SpartaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = SpartaError::InvalidInput("session already completed".into());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"type":"InvalidInput","message":"session already completed"}"#);

        let back: SpartaError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(SpartaError::Storage("x".into()).label(), "storage");
        assert_eq!(SpartaError::Config("x".into()).label(), "config");
        assert_eq!(SpartaError::NotFound("x".into()).label(), "not_found");
    }
}
