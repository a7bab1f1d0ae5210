//! Error types for the promptstore application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during prompt management operations.

use std::io;

use thiserror::Error;

/// The main error type for the promptstore application.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Save-time validation failure (missing title or empty content).
    #[error("{message}")]
    Validation { message: String },

    /// Prompt was not found when performing an operation.
    #[error("Prompt not found: {id}")]
    PromptNotFound { id: String },

    /// The key-value store rejected a read or write.
    #[error("Storage failed: {message}")]
    StorageFailed { message: String },

    /// The clipboard command ran but did not accept the text.
    #[error("Clipboard copy failed: {message}")]
    ClipboardFailed { message: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}
