//! umbra renderer - deterministic CPU ray tracing.
//!
//! Shades camera rays against a frozen [`Scene`](umbra_core::Scene) with
//! direct lighting from point lights, optional shadow attenuation and
//! recursive mirror reflection, then writes one radiance grid per camera.

mod antialias;
mod error;
mod grid;
mod renderer;
mod shading;

pub use antialias::box_filter;
pub use error::{OutputError, OutputResult, RenderError, RenderResult};
pub use grid::{output_path, write_grid, RadianceGrid, CHANNEL_NAMES};
pub use renderer::{render_camera, render_scene, render_to_files, shade_grid, RenderConfig};
pub use shading::{fire_ray, fire_ray_counted, fire_ray_with_stats, TraceStats, ENERGY_THRESHOLD};

/// Re-export the math types from umbra_math
pub use umbra_math::{Ray, Vec3};
