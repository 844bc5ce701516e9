//! Core error types for missiontrack-core.
//!
//! This module defines the error hierarchy using thiserror so that every
//! layer of the library reports failures with a typed, printable error.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for missiontrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote backend errors
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Validation errors
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("database is locked")]
    Locked,

    /// Data directory could not be created or resolved
    #[error("data directory unavailable: {0}")]
    DataDir(String),

    /// Persisted value exists but cannot be decoded
    #[error("corrupt persisted state for key '{key}': {message}")]
    Corrupt { key: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Remote backend errors.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// No backend configured
    #[error("no remote backend configured")]
    NotConfigured,
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Habit index out of bounds
    #[error("habit index {index} out of bounds (length: {len})")]
    OutOfBounds { index: usize, len: usize },

    /// No habit with the given name
    #[error("unknown habit: {0}")]
    UnknownHabit(String),

    /// Habit names must be unique within a list
    #[error("duplicate habit name: {0}")]
    DuplicateName(String),

    /// Invalid field value
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
