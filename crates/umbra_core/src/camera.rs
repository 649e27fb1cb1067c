//! Pinhole camera and primary ray generation.

use umbra_math::{normalize, Ray, Vec3};

use crate::error::{SceneError, SceneResult};

/// Immutable pinhole camera looking down the -Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    width: u32,
    height: u32,
    /// Field of view in radians
    fov: f64,
    origin: Vec3,
}

/// Largest accepted width or height. The supersampling grid `2n + 1` must
/// still fit in a `u32`.
pub const MAX_RESOLUTION: u32 = (u32::MAX - 1) / 2;

impl Camera {
    /// Create a new camera.
    ///
    /// Fails if the resolution is empty or above [`MAX_RESOLUTION`], or if
    /// the field of view is not a positive finite angle.
    pub fn new(width: u32, height: u32, fov: f64, origin: Vec3) -> SceneResult<Self> {
        let valid_size = |n: u32| (1..=MAX_RESOLUTION).contains(&n);
        if !valid_size(width) || !valid_size(height) || !fov.is_finite() || fov <= 0.0 {
            return Err(SceneError::InvalidCamera { width, height, fov });
        }
        Ok(Self {
            width,
            height,
            fov,
            origin,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn position(&self) -> Vec3 {
        self.origin
    }

    /// Resolution of the supersampling grid: `(2w + 1, 2h + 1)`.
    pub fn supersampled_size(&self) -> (u32, u32) {
        (self.width * 2 + 1, self.height * 2 + 1)
    }

    /// Generate the ray through pixel (`row`, `col`) of the camera's own image.
    pub fn primary_ray(&self, row: u32, col: u32) -> Ray {
        self.ray_through(row, col, self.width, self.height)
    }

    /// Generate the ray through cell (`row`, `col`) of a `grid_width` x
    /// `grid_height` grid spanning the camera's field of view.
    ///
    /// The ray carries full transmission weight.
    pub fn ray_through(&self, row: u32, col: u32, grid_width: u32, grid_height: u32) -> Ray {
        let w = grid_width as f64;
        let h = grid_height as f64;
        let half_fov = (self.fov / 2.0).tan();

        let x = -(2.0 * (col as f64 + 0.5) / w - 1.0) * half_fov * (w / h);
        let y = -(2.0 * (row as f64 + 0.5) / h - 1.0) * half_fov;
        let direction = normalize(Vec3::new(x, y, -1.0));

        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(1280, 720, PI / 3.0, Vec3::new(250.0, 275.0, 500.0)).unwrap();

        assert_eq!(camera.width(), 1280);
        assert_eq!(camera.height(), 720);
        assert_eq!(camera.fov(), PI / 3.0);
        assert_eq!(camera.position(), Vec3::new(250.0, 275.0, 500.0));
        assert_eq!(camera.supersampled_size(), (2561, 1441));
    }

    #[test]
    fn test_invalid_camera() {
        assert!(Camera::new(0, 10, 1.0, Vec3::ZERO).is_err());
        assert!(Camera::new(10, 0, 1.0, Vec3::ZERO).is_err());
        assert!(Camera::new(10, 10, 0.0, Vec3::ZERO).is_err());
        assert!(Camera::new(10, 10, f64::NAN, Vec3::ZERO).is_err());
        assert!(Camera::new(MAX_RESOLUTION + 1, 10, 1.0, Vec3::ZERO).is_err());
        assert!(Camera::new(10, u32::MAX, 1.0, Vec3::ZERO).is_err());
    }

    #[test]
    fn test_largest_supersampled_size_fits() {
        let camera = Camera::new(MAX_RESOLUTION, MAX_RESOLUTION, 1.0, Vec3::ZERO).unwrap();
        assert_eq!(camera.supersampled_size(), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        // Odd resolution so that a pixel center sits on the optical axis
        let camera = Camera::new(3, 3, PI / 2.0, Vec3::ZERO).unwrap();
        let ray = camera.primary_ray(1, 1);

        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
        assert_eq!(ray.radiance, Vec3::ONE);
    }

    #[test]
    fn test_ray_matches_projection_formula() {
        let fov = PI / 3.0;
        let camera = Camera::new(4, 2, fov, Vec3::ZERO).unwrap();
        let ray = camera.primary_ray(0, 0);

        let t = (fov / 2.0).tan();
        let x = -(2.0 * 0.5 / 4.0 - 1.0) * t * 2.0;
        let y = -(2.0 * 0.5 / 2.0 - 1.0) * t;
        let expected = Vec3::new(x, y, -1.0).normalize();

        assert!((ray.direction - expected).length() < 1e-12);
        // Top-left pixel: +x (mirrored horizontally), +y (up)
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.y > 0.0);
        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
    }
}
