//! Render and output errors.

use std::path::PathBuf;

use thiserror::Error;
use umbra_core::SceneError;

/// Errors that can occur while writing radiance grids.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors that can occur during a render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Failed to read render config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Invalid render config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
