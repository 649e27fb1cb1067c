//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use umbra_math::{normalize, Ray, Vec3};

use crate::material::MaterialId;

/// Determinants below this magnitude mean the ray runs parallel to the plane.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// Hits at or closer than this distance are treated as self-intersections.
pub const MIN_HIT_DISTANCE: f64 = 1e-8;

/// A triangle referencing a material of its scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub material: MaterialId,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: MaterialId) -> Self {
        Self {
            v0,
            v1,
            v2,
            material,
        }
    }

    /// Unit normal following the winding `v0 -> v1 -> v2`.
    ///
    /// Degenerate (zero-area) triangles yield a zero vector.
    pub fn normal(&self) -> Vec3 {
        normalize((self.v1 - self.v0).cross(self.v2 - self.v0))
    }

    /// Unit normal facing the side `observer` points to.
    ///
    /// `observer` is a direction from the surface, typically
    /// `ray.origin - hit_point`.
    pub fn normal_towards(&self, observer: Vec3) -> Vec3 {
        let normal = self.normal();
        if normalize(observer).dot(normal) < 0.0 {
            return normalize((self.v2 - self.v0).cross(self.v1 - self.v0));
        }
        normal
    }

    /// Distance along `ray` to the triangle, if it is hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let pvec = ray.direction.cross(edge2);
        let det = edge1.dot(pvec);

        // Ray is parallel to triangle
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = ray.origin - self.v0;
        let u = tvec.dot(pvec) * inv_det;

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = ray.direction.dot(qvec) * inv_det;

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        (t > MIN_HIT_DISTANCE).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        // Triangle in XY plane at z=-1
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            MaterialId::new(0),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = unit_triangle();

        // Ray pointing at triangle center
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = tri.intersect(&ray).expect("ray should hit");
        assert!((t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_hit_through_known_point() {
        let tri = unit_triangle();
        let origin = Vec3::new(3.0, 2.0, 4.0);
        let target = Vec3::new(0.2, -0.3, -1.0);
        let direction = (target - origin).normalize();

        let t = tri.intersect(&Ray::new(origin, direction)).expect("ray should hit");
        assert!((t - (target - origin).length()).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = unit_triangle();

        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray).is_none());

        // Plane is hit but outside the barycentric range
        let ray = Ray::new(Vec3::new(5.0, 5.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::X);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_on_surface_is_not_a_hit() {
        let tri = unit_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_normal_faces_observer() {
        let tri = unit_triangle();
        assert_eq!(tri.normal(), Vec3::Z);

        let observers = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(3.0, -2.0, -0.5),
            Vec3::new(-1.0, 7.0, 0.25),
        ];
        for observer in observers {
            let n = tri.normal_towards(observer);
            assert!(observer.normalize().dot(n) >= 0.0, "observer {:?}", observer);
            assert!((n.length() - 1.0).abs() < 1e-12);
        }
        assert_eq!(tri.normal_towards(Vec3::new(0.0, 0.0, -2.0)), -Vec3::Z);
    }

    #[test]
    fn test_degenerate_normal_is_zero() {
        let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0, MaterialId::new(0));
        assert_eq!(tri.normal(), Vec3::ZERO);
    }
}
