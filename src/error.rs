//! Error types for devmon
//!
//! Uses `thiserror` for library errors. Expected registry outcomes
//! (duplicate ID, not found, invalid input) are boolean results, not
//! errors - only startup and programmer errors live here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for devmon operations
pub type DevmonResult<T> = Result<T, DevmonError>;

/// Main error type for devmon operations
#[derive(Error, Debug)]
pub enum DevmonError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration file explicitly requested but missing
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Unknown device status string
    #[error("unknown status '{value}' - expected Offline, Maintenance or Online")]
    InvalidStatus { value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
