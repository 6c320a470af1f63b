//! Unified error types for mockview

use thiserror::Error;

/// Unified error type for all mockview operations
#[derive(Error, Debug)]
pub enum VerifyError {
    // Browser errors
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Screenshot failed: {0}")]
    ScreenshotFailed(String),

    // Mock rule errors
    #[error("Invalid mock pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using VerifyError
pub type Result<T> = std::result::Result<T, VerifyError>;
