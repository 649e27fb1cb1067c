//! Errors raised while assembling a scene.

use thiserror::Error;

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Unknown material {index} (scene has {count} materials)")]
    UnknownMaterial { index: usize, count: usize },

    #[error("Invalid camera: {width}x{height}, fov {fov}")]
    InvalidCamera { width: u32, height: u32, fov: f64 },

    #[error("Scene has no cameras to render from")]
    NoCameras,
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
