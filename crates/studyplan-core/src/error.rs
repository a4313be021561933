//! Error types for Studyplan core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing messages.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Studyplan operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Core error type for Studyplan operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Rejected generator input (empty subject list, non-positive hours/days)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Key file could not be read or created
    #[error("Key file error at {}: {message}", .path.display())]
    KeyIo { path: PathBuf, message: String },

    /// Ciphertext failed integrity verification
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Structurally invalid or ambiguous schedule data
    #[error("Format error: {0}")]
    Format(String),

    /// File extension does not map to a known schedule format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Schedule file does not exist
    #[error("Schedule file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Caller declined to overwrite an existing file
    #[error("Overwrite declined for {}", .0.display())]
    OverwriteDeclined(PathBuf),

    /// Encryption-side failure
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Other I/O failure while reading or writing schedule files
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::Storage(err.to_string())
    }
}
