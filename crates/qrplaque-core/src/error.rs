//! Error types for qrplaque-rs.

use thiserror::Error;

/// The main error type for qrplaque-rs operations.
#[derive(Error, Debug)]
pub enum PlaqueError {
    /// A parameter is out of range or geometrically inconsistent with the others.
    #[error("invalid parameter '{field}': {reason}")]
    Configuration {
        /// Serialized name of the offending field (e.g. `frame_outline_mm`).
        field: &'static str,
        /// Human readable explanation.
        reason: String,
    },

    /// The module matrix handed over by the encoder is unusable.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// An external process exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Process {
        program: String,
        status: String,
        stderr: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PlaqueError {
    /// Shorthand for a [`PlaqueError::Configuration`] error.
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the offending field name for configuration errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Configuration { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// A specialized Result type for qrplaque-rs operations.
pub type Result<T> = std::result::Result<T, PlaqueError>;
