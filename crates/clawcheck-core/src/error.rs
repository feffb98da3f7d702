//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error type used throughout the checklist engine. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! The taxonomy is deliberately small. Store mutations are infallible by
//! contract (unknown identifiers resolve to defaults, persistence failures
//! degrade to a logged warning), so errors surface only from catalog
//! loading, timestamp parsing, and explicit serialization.

use thiserror::Error;

/// Top-level error type for the checklist engine.
#[derive(Error, Debug)]
pub enum ClawcheckError {
    /// The catalog input dataset is malformed or internally inconsistent.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Timestamp parsing or construction failed.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ClawcheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = ClawcheckError::Catalog("duplicate control id \"gateway-bind\"".into());
        assert_eq!(
            err.to_string(),
            "catalog error: duplicate control id \"gateway-bind\""
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ClawcheckError = io.into();
        assert!(err.to_string().starts_with("io error:"));
    }
}
