//! Recursive shading.
//!
//! Each hit combines a mirror term, traced recursively, with the direct
//! contribution of every point light. Radiance carried by the incoming ray
//! acts as a per-channel weight on everything computed at the hit.

use std::f64::consts::PI;

use umbra_core::{Hit, Light, Scene};
use umbra_math::{length, normalize, Ray, Vec3};

use crate::renderer::RenderConfig;

/// Mirror reflections are only traced while the incoming weight summed over
/// the channels exceeds this value.
pub const ENERGY_THRESHOLD: f64 = 0.0005;

/// Distance a shadow ray origin is pushed along the normal.
const SHADOW_BIAS: f64 = 1e-3;

/// Weight of a light behind the surface when shadow attenuation is on.
const BACKFACE_WEIGHT: f64 = -0.008;

/// Weight of an occluded light when shadow attenuation is on.
const SHADOW_WEIGHT: f64 = 0.008;

/// Bookkeeping for one traced camera ray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Rays shaded: the primary ray plus every mirror bounce
    pub rays: usize,
    /// Whether a reflection was dropped at `RenderConfig::max_depth`
    pub depth_capped: bool,
}

/// Shade `ray` against `scene`.
///
/// Returns the ray with its radiance replaced by the shaded result, or with
/// zero radiance if nothing is hit.
pub fn fire_ray(scene: &Scene, ray: &Ray, config: &RenderConfig) -> Ray {
    fire_ray_with_stats(scene, ray, config).0
}

/// Same as [`fire_ray`], also returning how many rays were shaded in total
/// (the primary ray plus every mirror bounce).
pub fn fire_ray_counted(scene: &Scene, ray: &Ray, config: &RenderConfig) -> (Ray, usize) {
    let (shaded, stats) = fire_ray_with_stats(scene, ray, config);
    (shaded, stats.rays)
}

/// Same as [`fire_ray`], also returning the [`TraceStats`] of the ray.
pub fn fire_ray_with_stats(scene: &Scene, ray: &Ray, config: &RenderConfig) -> (Ray, TraceStats) {
    let mut stats = TraceStats::default();
    let shaded = trace(scene, ray, config, config.max_depth, &mut stats);
    (shaded, stats)
}

fn trace(scene: &Scene, ray: &Ray, config: &RenderConfig, depth: u32, stats: &mut TraceStats) -> Ray {
    stats.rays += 1;

    let Some(hit) = scene.closest_hit(ray) else {
        return ray.black();
    };
    let material = hit.material;
    let weight = ray.radiance;

    let mut radiance = Vec3::ZERO;

    if material.is_mirror() && channel_sum(weight) > ENERGY_THRESHOLD {
        if depth == 0 {
            stats.depth_capped = true;
        } else {
            // Reflection direction is d + 2N, not the textbook d - 2(d.N)N
            let reflected = Ray::with_radiance(
                hit.point,
                normalize(ray.direction + 2.0 * hit.normal),
                material.mirror() * material.base_color * weight,
            );
            radiance = trace(scene, &reflected, config, depth - 1, stats).radiance;
        }
    }

    for light in scene.lights() {
        radiance += direct_light(scene, &hit, light, weight, config);
    }

    ray.with(radiance / PI)
}

/// Contribution of a single light at `hit`, before the 1/pi normalization.
fn direct_light(scene: &Scene, hit: &Hit<'_>, light: &Light, weight: Vec3, config: &RenderConfig) -> Vec3 {
    let to_light = light.position - hit.point;
    let dist = length(to_light);
    if dist == 0.0 {
        return Vec3::ZERO;
    }
    let light_dir = normalize(to_light);
    let cos_theta = light_dir.dot(hit.normal);

    let material = hit.material;
    let diffuse = 1.0 - material.mirror();
    let irradiance = light.rgb_intensity * material.base_color * weight / (dist * dist);

    if config.light_in_shadows {
        if cos_theta <= 0.0 {
            return irradiance * (BACKFACE_WEIGHT * cos_theta * diffuse);
        }
        if occluded(scene, hit.point + hit.normal * SHADOW_BIAS, light_dir, dist) {
            return irradiance * (SHADOW_WEIGHT * cos_theta * diffuse);
        }
    }

    irradiance * (cos_theta * diffuse)
}

/// Check if anything lies between `origin` and a light `dist` away.
fn occluded(scene: &Scene, origin: Vec3, direction: Vec3, dist: f64) -> bool {
    let shadow_ray = Ray::new(origin, direction);
    scene
        .closest_hit(&shadow_ray)
        .is_some_and(|hit| length(hit.point - origin) < dist)
}

#[inline]
fn channel_sum(v: Vec3) -> f64 {
    v.x + v.y + v.z
}
