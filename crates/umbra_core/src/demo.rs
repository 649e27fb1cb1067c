//! Hand-assembled outdoor demo scene.
//!
//! A grass floor and a sky wall, two diffuse boxes, a tilted mirror panel and
//! a yellow semi-mirror box, lit by a single warm point light.

use std::f64::consts::PI;

use umbra_math::Vec3;

use crate::camera::Camera;
use crate::error::SceneResult;
use crate::light::Light;
use crate::loader::shp::{CORNELL_LIGHT_INTENSITY, CORNELL_LIGHT_WEIGHTS};
use crate::material::Material;
use crate::scene::SceneBuilder;

pub const DEFAULT_WIDTH: u32 = 1280;
pub const DEFAULT_HEIGHT: u32 = 720;

/// Camera used for the demo and Cornell-box scenes.
pub fn default_camera() -> SceneResult<Camera> {
    camera_with_resolution(DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// The default camera at another resolution.
pub fn camera_with_resolution(width: u32, height: u32) -> SceneResult<Camera> {
    Camera::new(width, height, PI / 3.0, Vec3::new(250.0, 275.0, 500.0))
}

/// Build the outdoor scene. No camera is added.
pub fn outdoor_scene() -> SceneResult<SceneBuilder> {
    let mut builder = SceneBuilder::new();
    let brightness = Vec3::ONE;

    let grass = builder.add_material(Material::new(Vec3::new(0.1, 0.4, 0.1), brightness));
    let sky = builder.add_material(Material::new(Vec3::new(0.05, 0.9, 0.99), brightness));
    let red = builder.add_material(Material::new(Vec3::new(0.8, 0.2, 0.3), brightness));
    let white = builder.add_material(Material::new(Vec3::splat(0.3), brightness));
    let mirror = builder.add_material(Material::new(Vec3::ONE, brightness).with_mirror(0.7));
    let gold = builder.add_material(
        Material::new(Vec3::new(0.90588, 0.8196, 0.078), brightness).with_mirror(0.3),
    );

    // Floor
    builder.add_plane(
        Vec3::new(-500.0, 0.0, 50.0),
        Vec3::new(1000.0, 0.0, 50.0),
        Vec3::new(1000.0, 0.0, -2000.0),
        Vec3::new(-500.0, 0.0, -2000.0),
        grass,
    )?;

    // Back wall
    builder.add_plane(
        Vec3::new(10000.0, -5000.0, -2000.0),
        Vec3::new(-2000.0, -5000.0, -2000.0),
        Vec3::new(-2000.0, 5000.0, -2000.0),
        Vec3::new(10000.0, 5000.0, -2000.0),
        sky,
    )?;

    builder.add_cube(
        Vec3::new(100.0, 0.0, -300.0),
        Vec3::new(250.0, 0.0, -400.0),
        Vec3::new(250.0, 150.0, -400.0),
        Vec3::new(100.0, 150.0, -300.0),
        red,
        100.0,
    )?;

    builder.add_cube(
        Vec3::new(600.0, 0.0, -150.0),
        Vec3::new(480.0, 0.0, -800.0),
        Vec3::new(480.0, 100.0, -800.0),
        Vec3::new(600.0, 100.0, -150.0),
        white,
        100.0,
    )?;

    // Tilted mirror panel
    builder.add_plane(
        Vec3::new(750.0, 0.0, -900.0),
        Vec3::new(300.0, 0.0, -1100.0),
        Vec3::new(200.0, 500.0, -1000.0),
        Vec3::new(650.0, 500.0, -800.0),
        mirror,
    )?;

    builder.add_cube(
        Vec3::new(0.0, 0.0, -75.0),
        Vec3::new(150.0, 0.0, -50.0),
        Vec3::new(150.0, 200.0, -50.0),
        Vec3::new(0.0, 200.0, -75.0),
        gold,
        150.0,
    )?;

    builder.add_light(Light::from_total_intensity(
        Vec3::new(600.0, 600.0, -500.0),
        CORNELL_LIGHT_INTENSITY,
        CORNELL_LIGHT_WEIGHTS,
    ));

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outdoor_scene_contents() {
        let mut builder = outdoor_scene().unwrap();
        builder.add_camera(default_camera().unwrap());
        let scene = builder.build();

        // 3 planes + 3 cubes
        assert_eq!(scene.triangle_count(), 3 * 2 + 3 * 12);
        assert_eq!(scene.material_count(), 6);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.camera_count(), 1);

        let mirrors = scene.materials().iter().filter(|m| m.is_mirror()).count();
        assert_eq!(mirrors, 2);
    }

    #[test]
    fn test_default_camera() {
        let camera = default_camera().unwrap();
        assert_eq!(camera.width(), DEFAULT_WIDTH);
        assert_eq!(camera.height(), DEFAULT_HEIGHT);
        assert_eq!(camera.position(), Vec3::new(250.0, 275.0, 500.0));
    }
}
