//! Math types shared by every umbra crate.
//!
//! Geometry and radiance are both carried in double precision so that a
//! render is reproducible bit-for-bit regardless of how pixels are scheduled.

// Re-export glam for convenience
pub use glam;

/// Three-component vector used for positions, directions and per-channel radiance.
pub type Vec3 = glam::DVec3;

mod ray;
mod vector;

pub use ray::Ray;
pub use vector::{length, normalize};
