//! Error types for the REE Explorer.
//!
//! This module defines a unified error enum covering all error categories in
//! the workspace: configuration, I/O, dataset availability, corpus/index
//! construction, and argument validation.

use thiserror::Error;

/// Unified error type for the REE Explorer.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
/// We never panic: errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required dataset table is missing or malformed
    #[error("Dataset unavailable: {0}")]
    DataUnavailable(String),

    /// The corpus contained zero documents after building
    #[error("cannot fit a vector space over an empty corpus")]
    EmptyCorpus,

    /// A caller-supplied argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
