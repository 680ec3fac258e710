//! Structured error types for grs-dashboard
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations.

use thiserror::Error;

/// All possible errors in grs-dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Topic key not present in the content table
    #[error("Unknown topic '{0}'")]
    UnknownTopic(String),

    /// Same topic key defined twice in a content table
    #[error("Duplicate topic '{0}' in content table")]
    DuplicateTopic(String),

    /// Required field is blank
    #[error("Topic '{key}' has an empty {field}")]
    EmptyField { key: String, field: &'static str },

    /// Content table is not valid TOML
    #[error("Content parse error: {0}")]
    ContentParse(#[from] toml::de::Error),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
