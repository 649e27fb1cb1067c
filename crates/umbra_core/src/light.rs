//! Point lights.

use umbra_math::Vec3;

/// An isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,

    /// Radiant intensity per channel (W/sr)
    pub rgb_intensity: Vec3,
}

impl Light {
    pub fn new(position: Vec3, rgb_intensity: Vec3) -> Self {
        Self {
            position,
            rgb_intensity,
        }
    }

    /// Create a light whose total intensity is split across the channels in
    /// proportion to `weights`.
    ///
    /// Zero weights produce a dark light.
    pub fn from_total_intensity(position: Vec3, total: f64, weights: Vec3) -> Self {
        let sum = weights.x + weights.y + weights.z;
        let rgb_intensity = if sum == 0.0 {
            Vec3::ZERO
        } else {
            weights * (total / sum)
        };
        Self::new(position, rgb_intensity)
    }

    /// Sum of the per-channel intensities.
    pub fn total_intensity(&self) -> f64 {
        self.rgb_intensity.x + self.rgb_intensity.y + self.rgb_intensity.z
    }
}
