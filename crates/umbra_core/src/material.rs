//! Surface materials.

use umbra_math::Vec3;

/// Upper bound of the mirror coefficient.
///
/// A coefficient of exactly 1 would turn a surface into a perfect mirror whose
/// reflections never lose energy.
pub const MAX_MIRROR: f64 = 0.99999;

/// Stable handle to a material stored in a scene.
///
/// Triangles hold a handle instead of a reference; it is resolved against the
/// scene's material store whenever a hit is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(usize);

impl MaterialId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A diffuse/mirror material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse reflectance per channel (0-1)
    pub base_color: Vec3,

    /// Brightness/ambient coefficient per channel
    pub brightness: Vec3,

    /// Blend between diffuse (0) and mirror-like (towards 1) reflection
    mirror: f64,
}

impl Material {
    /// Create a purely diffuse material.
    pub fn new(base_color: Vec3, brightness: Vec3) -> Self {
        Self {
            base_color,
            brightness,
            mirror: 0.0,
        }
    }

    /// Set the mirror coefficient, clamped to `[0, MAX_MIRROR]`.
    pub fn with_mirror(mut self, mirror: f64) -> Self {
        self.set_mirror(mirror);
        self
    }

    /// Set the mirror coefficient, clamped to `[0, MAX_MIRROR]`.
    pub fn set_mirror(&mut self, mirror: f64) {
        self.mirror = if mirror.is_nan() {
            0.0
        } else {
            mirror.clamp(0.0, MAX_MIRROR)
        };
    }

    /// The mirror coefficient.
    pub fn mirror(&self) -> f64 {
        self.mirror
    }

    /// Check if this material reflects any light specularly.
    pub fn is_mirror(&self) -> bool {
        self.mirror > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Vec3::splat(0.5), Vec3::ONE) // Grey default
    }
}
