//! Free-standing vector helpers.

use crate::Vec3;

/// Euclidean norm of `v`.
#[inline]
pub fn length(v: Vec3) -> f64 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// A zero vector is returned unchanged instead of producing NaNs.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len == 0.0 {
        return v;
    }
    v / len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(length(Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(length(Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Vec3::new(0.0, 0.0, -10.0));
        assert_eq!(n, Vec3::new(0.0, 0.0, -1.0));

        let n = normalize(Vec3::new(1.0, 2.0, 2.0));
        assert!((length(n) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_identity() {
        let n = normalize(Vec3::ZERO);
        assert_eq!(n, Vec3::ZERO);
        assert!(!n.x.is_nan());
    }
}
