//! Render loop.
//!
//! For every camera of a scene: generate one ray per pixel (or per
//! supersample), shade it, optionally box-filter the samples, and hand the
//! resulting grid to the output stage.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use umbra_core::{Camera, Scene, SceneError};

use crate::antialias::box_filter;
use crate::error::RenderResult;
use crate::grid::{output_path, write_grid, RadianceGrid};
use crate::shading::fire_ray_with_stats;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Supersample at (2w + 1) x (2h + 1) and box-filter down to w x h
    pub antialiasing: bool,
    /// Attenuate occluded and back-facing lights instead of lighting fully
    pub light_in_shadows: bool,
    /// Hard cap on mirror bounces per camera ray
    pub max_depth: u32,
    /// Shade rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            antialiasing: false,
            light_in_shadows: false,
            max_depth: 50,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn with_antialiasing(mut self, antialiasing: bool) -> Self {
        self.antialiasing = antialiasing;
        self
    }

    pub fn with_shadows(mut self, light_in_shadows: bool) -> Self {
        self.light_in_shadows = light_in_shadows;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RenderResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// Shade every cell of a `width` x `height` grid spanning the camera's view.
///
/// Logs a warning when any cell of this pass hit the mirror depth cap.
pub fn shade_grid(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RadianceGrid {
    let (grid, capped) = shade_cells(scene, camera, width, height, config);
    if capped > 0 {
        log::warn!(
            "Mirror recursion reached the depth cap ({}) in {} of {} cells, reflections truncated",
            config.max_depth,
            capped,
            grid.pixels.len()
        );
    }
    grid
}

/// Shade the grid and count the cells whose reflections were truncated.
fn shade_cells(
    scene: &Scene,
    camera: &Camera,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> (RadianceGrid, usize) {
    let mut grid = RadianceGrid::new(width, height);
    if width == 0 || height == 0 {
        return (grid, 0);
    }

    let shade_row = |(row, line): (usize, &mut [umbra_math::Vec3])| {
        let mut capped = 0;
        for (col, pixel) in line.iter_mut().enumerate() {
            let ray = camera.ray_through(row as u32, col as u32, width, height);
            let (shaded, stats) = fire_ray_with_stats(scene, &ray, config);
            *pixel = shaded.radiance;
            capped += usize::from(stats.depth_capped);
        }
        capped
    };

    let capped = if config.parallel {
        grid.pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .map(shade_row)
            .sum()
    } else {
        grid.pixels
            .chunks_mut(width as usize)
            .enumerate()
            .map(shade_row)
            .sum()
    };

    (grid, capped)
}

/// Render the image of a single camera.
pub fn render_camera(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RadianceGrid {
    if config.antialiasing {
        let (width, height) = camera.supersampled_size();
        log::debug!("Supersampling at {}x{}", width, height);
        let samples = shade_grid(scene, camera, width, height, config);
        box_filter(&samples)
    } else {
        shade_grid(scene, camera, camera.width(), camera.height(), config)
    }
}

/// Render the image of every camera in the scene.
pub fn render_scene(scene: &Scene, config: &RenderConfig) -> RenderResult<Vec<RadianceGrid>> {
    if scene.cameras().is_empty() {
        return Err(SceneError::NoCameras.into());
    }

    let grids = scene
        .cameras()
        .iter()
        .enumerate()
        .map(|(index, camera)| {
            log::info!(
                "Rendering camera {} at {}x{} (antialiasing: {}, shadows: {})",
                index,
                camera.width(),
                camera.height(),
                config.antialiasing,
                config.light_in_shadows
            );
            let start = Instant::now();
            let grid = render_camera(scene, camera, config);
            log::info!("Camera {} rendered in {:?}", index, start.elapsed());
            grid
        })
        .collect();

    Ok(grids)
}

/// Render every camera and write each grid next to `base`.
///
/// Returns the paths written, in camera order.
pub fn render_to_files<P: AsRef<Path>>(
    scene: &Scene,
    config: &RenderConfig,
    base: P,
) -> RenderResult<Vec<PathBuf>> {
    let base = base.as_ref();
    let grids = render_scene(scene, config)?;

    let mut written = Vec::with_capacity(grids.len());
    for (index, grid) in grids.iter().enumerate() {
        let path = output_path(base, index);
        write_grid(&path, grid)?;
        log::info!("Wrote {}x{} grid to {:?}", grid.width, grid.height, path);
        written.push(path);
    }
    Ok(written)
}
