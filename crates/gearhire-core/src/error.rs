//! Error types for GearHire

use thiserror::Error;

use crate::types::OwnerId;

/// Main error type for GearHire operations
#[derive(Error, Debug)]
pub enum GearError {
    /// Trigger rect could not be read (unknown trigger or not yet measured)
    #[error("Geometry unavailable for trigger: {0}")]
    GeometryUnavailable(OwnerId),

    /// Phone number has no usable digits
    #[error("Invalid phone number: {0:?}")]
    InvalidPhone(String),

    /// URL could not be parsed or constructed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Opening an external browsing context failed
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Slug that names no page region
    #[error("unknown region '{0}'")]
    UnknownRegion(String),

    /// Action index outside the current menu
    #[error("No action at index {0}")]
    ActionIndex(usize),

    /// Site configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GearError
pub type CoreResult<T> = Result<T, GearError>;
