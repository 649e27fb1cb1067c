use crate::Vec3;

/// A ray in 3D space together with the radiance it carries.
///
/// `radiance` starts as a per-channel transmission weight when a ray is
/// spawned and holds the shaded result once the ray has been traced. Rays are
/// plain values: each shading step returns a new ray rather than mutating the
/// one it was given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Direction of travel, expected to be unit length.
    pub direction: Vec3,
    pub radiance: Vec3,
}

impl Ray {
    /// Full transmission in every channel.
    pub const FULL_WEIGHT: Vec3 = Vec3::ONE;

    /// Create a ray carrying full transmission weight.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_radiance(origin, direction, Self::FULL_WEIGHT)
    }

    /// Create a ray carrying an explicit radiance/weight.
    pub fn with_radiance(origin: Vec3, direction: Vec3, radiance: Vec3) -> Self {
        Self {
            origin,
            direction,
            radiance,
        }
    }

    /// Copy of this ray carrying no energy.
    pub fn black(&self) -> Self {
        Self {
            radiance: Vec3::ZERO,
            ..*self
        }
    }

    /// Copy of this ray carrying `radiance`.
    pub fn with(&self, radiance: Vec3) -> Self {
        Self { radiance, ..*self }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.radiance, Vec3::ONE);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_black_keeps_geometry() {
        let ray = Ray::with_radiance(Vec3::Y, Vec3::Z, Vec3::splat(0.5));
        let black = ray.black();

        assert_eq!(black.origin, ray.origin);
        assert_eq!(black.direction, ray.direction);
        assert_eq!(black.radiance, Vec3::ZERO);
        // The source ray is untouched
        assert_eq!(ray.radiance, Vec3::splat(0.5));
    }
}
