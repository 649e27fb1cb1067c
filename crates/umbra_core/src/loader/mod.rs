//! Scene loaders.
//!
//! - [`shp`]: Cornell-box style `.shp` descriptions (parts with vertex and
//!   triangle lists, material chosen by part id)
//! - [`obj`]: Wavefront OBJ meshes placed with a uniform scale and an offset

pub mod obj;
pub mod shp;

pub use obj::{load_obj, load_obj_from_str, ObjPlacement};
pub use shp::{cornell_box, cornell_box_from_str, load_shp, load_shp_from_str};

use thiserror::Error;

use crate::error::SceneError;

/// Errors that can occur while loading scene files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Vertex index {index} out of range at line {line} ({count} vertices)")]
    InvalidIndex {
        line: usize,
        index: usize,
        count: usize,
    },

    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("No geometry found")]
    NoGeometry,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
