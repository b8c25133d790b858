//! Error handling for the voxel renderer
//!
//! Each subsystem owns a focused error enum; `EngineError` unifies them so
//! setup code can propagate everything with `?`. Only out-of-range grid
//! access panics, since that is a caller bug rather than a runtime condition.

use crate::camera::CameraError;
use crate::gpu::{ContractError, GpuError};

/// Main error type
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    // Configuration Errors
    #[error("Config file {path} could not be loaded: {error}")]
    ConfigLoad { path: String, error: String },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // Subsystem Errors
    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Gpu(#[from] GpuError),

    // System Errors
    #[error("IO error for {path}: {error}")]
    IoError { path: String, error: String },
}

/// Type alias for Results across the crate
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn invalid_config(field: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        EngineError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Extension trait attaching a path to IO failures
pub trait IoContext<T> {
    fn with_path(self, path: &std::path::Path) -> EngineResult<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn with_path(self, path: &std::path::Path) -> EngineResult<T> {
        self.map_err(|error| EngineError::IoError {
            path: path.display().to_string(),
            error: error.to_string(),
        })
    }
}
