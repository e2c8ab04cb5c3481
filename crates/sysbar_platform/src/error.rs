//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Backend failed to come up
    #[error("Backend initialization failed: {0}")]
    InitFailed(String),

    /// A system property could not be read
    #[error("Property read failed: {0}")]
    PropertyRead(String),

    /// A platform dimension resource is missing
    #[error("Missing dimension resource: {0}")]
    MissingDimension(String),

    /// Backend not supported on this target
    #[error("Platform not supported: {0}")]
    Unsupported(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
