//! Scene assembly and the closest-hit query.
//!
//! A scene is assembled through the append-only [`SceneBuilder`] and then
//! frozen into a [`Scene`], which is only ever read while rendering.

use umbra_math::{normalize, Ray, Vec3};

use crate::camera::Camera;
use crate::error::{SceneError, SceneResult};
use crate::light::Light;
use crate::material::{Material, MaterialId};
use crate::triangle::Triangle;

/// Record of the closest ray-scene intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the ray
    pub t: f64,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal facing the ray origin
    pub normal: Vec3,
    /// Material of the hit triangle
    pub material: &'a Material,
    /// Index of the hit triangle
    pub triangle: usize,
}

/// Append-only scene assembly.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    materials: Vec<Material>,
    triangles: Vec<Triangle>,
    lights: Vec<Light>,
    cameras: Vec<Camera>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material and return its handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId::new(self.materials.len());
        self.materials.push(material);
        id
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_camera(&mut self, camera: Camera) {
        self.cameras.push(camera);
    }

    /// Add a triangle using a previously added material.
    pub fn add_triangle(
        &mut self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        material: MaterialId,
    ) -> SceneResult<()> {
        self.check_material(material)?;
        self.triangles.push(Triangle::new(v0, v1, v2, material));
        Ok(())
    }

    /// Add a quad as the two triangles `(v0, v1, v2)` and `(v2, v3, v0)`.
    pub fn add_plane(
        &mut self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        v3: Vec3,
        material: MaterialId,
    ) -> SceneResult<()> {
        self.check_material(material)?;
        self.triangles.push(Triangle::new(v0, v1, v2, material));
        self.triangles.push(Triangle::new(v2, v3, v0, material));
        Ok(())
    }

    /// Add a box extruded from the base quad `v0..v3` by `depth` along the
    /// quad's normal `(v0 - v1) x (v2 - v1)`.
    ///
    /// Appends six planes (twelve triangles): base, four sides, top.
    pub fn add_cube(
        &mut self,
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        v3: Vec3,
        material: MaterialId,
        depth: f64,
    ) -> SceneResult<()> {
        self.check_material(material)?;

        let offset = normalize((v0 - v1).cross(v2 - v1)) * depth;
        let (w0, w1, w2, w3) = (v0 + offset, v1 + offset, v2 + offset, v3 + offset);

        self.add_plane(v0, v1, v2, v3, material)?;
        self.add_plane(v0, v1, w1, w0, material)?;
        self.add_plane(v1, v2, w2, w1, material)?;
        self.add_plane(v2, v3, w3, w2, material)?;
        self.add_plane(v3, v0, w0, w3, material)?;
        self.add_plane(w0, w1, w2, w3, material)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    fn check_material(&self, material: MaterialId) -> SceneResult<()> {
        if material.index() >= self.materials.len() {
            return Err(SceneError::UnknownMaterial {
                index: material.index(),
                count: self.materials.len(),
            });
        }
        Ok(())
    }

    /// Freeze the scene for rendering.
    pub fn build(self) -> Scene {
        log::info!(
            "Scene built: {} triangles, {} materials, {} lights, {} cameras",
            self.triangles.len(),
            self.materials.len(),
            self.lights.len(),
            self.cameras.len()
        );
        Scene {
            materials: self.materials,
            triangles: self.triangles,
            lights: self.lights,
            cameras: self.cameras,
        }
    }
}

/// A frozen scene: triangles, materials, lights and cameras.
///
/// Every triangle's material handle is valid for this scene, as the builder
/// rejects unknown handles.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    materials: Vec<Material>,
    triangles: Vec<Triangle>,
    lights: Vec<Light>,
    cameras: Vec<Camera>,
}

impl Scene {
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Get a material by handle.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.index())
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Find the closest triangle hit by `ray`.
    ///
    /// Every triangle is tested. On equal distances the triangle added first
    /// wins. The returned normal faces the ray origin.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<(usize, f64)> = None;

        for (index, triangle) in self.triangles.iter().enumerate() {
            if let Some(t) = triangle.intersect(ray) {
                if closest.is_none_or(|(_, best)| t < best) {
                    closest = Some((index, t));
                }
            }
        }

        let (index, t) = closest?;
        let triangle = &self.triangles[index];
        let point = ray.at(t);
        let material = self.material(triangle.material)?;

        Some(Hit {
            t,
            point,
            normal: triangle.normal_towards(ray.origin - point),
            material,
            triangle: index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Material {
        Material::new(Vec3::splat(0.5), Vec3::ONE)
    }

    fn quad() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let mut builder = SceneBuilder::new();
        let [a, b, c, d] = quad();

        let err = builder.add_triangle(a, b, c, MaterialId::new(0)).unwrap_err();
        assert_eq!(err, SceneError::UnknownMaterial { index: 0, count: 0 });

        let id = builder.add_material(grey());
        assert!(builder.add_triangle(a, b, c, id).is_ok());
        assert!(builder.add_plane(a, b, c, d, MaterialId::new(1)).is_err());
        assert!(builder.add_cube(a, b, c, d, MaterialId::new(5), 1.0).is_err());
        assert_eq!(builder.triangle_count(), 1);
    }

    #[test]
    fn test_add_plane_shares_diagonal() {
        let mut builder = SceneBuilder::new();
        let id = builder.add_material(grey());
        let [a, b, c, d] = quad();
        builder.add_plane(a, b, c, d, id).unwrap();

        let scene = builder.build();
        assert_eq!(scene.triangle_count(), 2);

        let first = scene.triangles()[0];
        let second = scene.triangles()[1];
        assert_eq!((first.v0, first.v1, first.v2), (a, b, c));
        assert_eq!((second.v0, second.v1, second.v2), (c, d, a));
    }

    #[test]
    fn test_add_cube_offsets_base_quad() {
        let mut builder = SceneBuilder::new();
        let id = builder.add_material(grey());
        let [a, b, c, d] = quad();
        let depth = 2.5;
        builder.add_cube(a, b, c, d, id, depth).unwrap();

        let scene = builder.build();
        assert_eq!(scene.triangle_count(), 12);

        // (v0 - v1) x (v2 - v1) = (-1, 0, 0) x (0, 1, 0) = (0, 0, -1)
        let offset = Vec3::new(0.0, 0.0, -depth);
        let base: Vec<Vec3> = [a, b, c, d].to_vec();
        let top: Vec<Vec3> = base.iter().map(|v| *v + offset).collect();

        for triangle in scene.triangles() {
            for v in [triangle.v0, triangle.v1, triangle.v2] {
                assert!(
                    base.contains(&v) || top.contains(&v),
                    "unexpected vertex {:?}",
                    v
                );
            }
        }

        // Last plane is the offset copy of the base quad
        let top_first = scene.triangles()[10];
        assert_eq!((top_first.v0, top_first.v1, top_first.v2), (top[0], top[1], top[2]));
        let top_second = scene.triangles()[11];
        assert_eq!((top_second.v0, top_second.v1, top_second.v2), (top[2], top[3], top[0]));
    }

    #[test]
    fn test_closest_hit_picks_nearest() {
        let mut builder = SceneBuilder::new();
        let near = builder.add_material(grey());
        let far = builder.add_material(Material::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE));
        let quad_at = |z: f64| {
            [
                Vec3::new(-1.0, -1.0, z),
                Vec3::new(1.0, -1.0, z),
                Vec3::new(1.0, 1.0, z),
                Vec3::new(-1.0, 1.0, z),
            ]
        };
        // Far quad first so the scan has to replace it
        let [a, b, c, d] = quad_at(-5.0);
        builder.add_plane(a, b, c, d, far).unwrap();
        let [a, b, c, d] = quad_at(-2.0);
        builder.add_plane(a, b, c, d, near).unwrap();
        let scene = builder.build();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.closest_hit(&ray).expect("ray should hit");

        assert!((hit.t - 2.0).abs() < 1e-12);
        assert_eq!(hit.point, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(hit.normal, Vec3::Z);
        assert_eq!(*hit.material, grey());
        assert!(hit.triangle >= 2);
    }

    #[test]
    fn test_equal_distance_keeps_first_triangle() {
        let mut builder = SceneBuilder::new();
        let first = builder.add_material(grey());
        let second = builder.add_material(Material::new(Vec3::ONE, Vec3::ONE));
        let (a, b, c) = (
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
        );
        builder.add_triangle(a, b, c, first).unwrap();
        builder.add_triangle(a, b, c, second).unwrap();
        let scene = builder.build();

        let hit = scene
            .closest_hit(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)))
            .unwrap();
        assert_eq!(hit.triangle, 0);
        assert_eq!(*hit.material, grey());
    }

    #[test]
    fn test_miss_returns_none() {
        let mut builder = SceneBuilder::new();
        let id = builder.add_material(grey());
        let [a, b, c, d] = quad();
        builder.add_plane(a, b, c, d, id).unwrap();
        let scene = builder.build();

        let ray = Ray::new(Vec3::new(0.5, 0.5, 1.0), Vec3::Z);
        assert!(scene.closest_hit(&ray).is_none());
        assert!(Scene::default().closest_hit(&ray).is_none());
    }
}
