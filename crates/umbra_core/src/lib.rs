//! umbra core - scene description for the umbra ray tracer.
//!
//! This crate provides:
//!
//! - **Scene value types**: `Material`, `Light`, `Camera`, `Triangle`
//! - **Scene assembly**: the append-only `SceneBuilder` and the frozen `Scene`
//!   with its closest-hit query
//! - **Loaders**: Cornell-box `.shp` descriptions and Wavefront OBJ meshes
//! - **Demo scene**: a hand-assembled outdoor scene
//!
//! # Example
//!
//! ```ignore
//! use umbra_core::{demo, Scene};
//!
//! let mut builder = demo::outdoor_scene()?;
//! builder.add_camera(demo::default_camera()?);
//! let scene: Scene = builder.build();
//! println!("{} triangles, {} lights", scene.triangle_count(), scene.light_count());
//! ```

pub mod camera;
pub mod demo;
pub mod error;
pub mod light;
pub mod loader;
pub mod material;
pub mod scene;
pub mod triangle;

// Re-export commonly used types
pub use camera::Camera;
pub use error::{SceneError, SceneResult};
pub use light::Light;
pub use material::{Material, MaterialId, MAX_MIRROR};
pub use scene::{Hit, Scene, SceneBuilder};
pub use triangle::Triangle;
pub use umbra_math::{Ray, Vec3};
