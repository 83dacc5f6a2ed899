use thiserror::Error;

use crate::parameters::bounds::BoundsError;

/// Error types for the ibeam-opt library.
#[derive(Error, Debug)]
pub enum IbeamError {
    /// The cross-section dimensions do not describe a physical I-beam.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Error for invalid parameter values.
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),

    /// Error for boundary constraint problems.
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// Error for invalid optimizer or sweep configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for ibeam-opt operations.
pub type Result<T> = std::result::Result<T, IbeamError>;
