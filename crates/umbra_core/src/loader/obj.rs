//! Wavefront OBJ loader.

use std::path::Path;

use umbra_math::Vec3;

use crate::material::MaterialId;
use crate::scene::SceneBuilder;

use super::{LoadError, LoadResult};

/// Uniform scale followed by a translation, applied to every OBJ vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjPlacement {
    pub scale: f64,
    pub translation: Vec3,
}

impl ObjPlacement {
    /// Placement of the reference teapot next to the demo boxes.
    pub const TEAPOT: ObjPlacement = ObjPlacement {
        scale: 85.0,
        translation: Vec3::new(400.0, 0.0, -300.0),
    };

    pub fn apply(&self, p: Vec3) -> Vec3 {
        p * self.scale + self.translation
    }
}

impl Default for ObjPlacement {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec3::ZERO,
        }
    }
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load every face of an OBJ file into `builder` with `material`.
///
/// Returns the number of triangles added. Materials declared by the OBJ file
/// itself are ignored.
pub fn load_obj<P: AsRef<Path>>(
    path: P,
    builder: &mut SceneBuilder,
    material: MaterialId,
    placement: ObjPlacement,
) -> LoadResult<usize> {
    let path = path.as_ref();
    log::info!("Loading mesh from: {:?}", path);
    let (models, _materials) = tobj::load_obj(path, &load_options())?;
    add_models(&models, builder, material, placement)
}

/// Same as [`load_obj`] for in-memory OBJ content.
pub fn load_obj_from_str(
    content: &str,
    builder: &mut SceneBuilder,
    material: MaterialId,
    placement: ObjPlacement,
) -> LoadResult<usize> {
    let mut reader = content.as_bytes();
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;
    add_models(&models, builder, material, placement)
}

fn add_models(
    models: &[tobj::Model],
    builder: &mut SceneBuilder,
    material: MaterialId,
    placement: ObjPlacement,
) -> LoadResult<usize> {
    let mut added = 0;

    for model in models {
        let mesh = &model.mesh;
        let vertex = |index: u32| -> Vec3 {
            let i = index as usize * 3;
            placement.apply(Vec3::new(
                f64::from(mesh.positions[i]),
                f64::from(mesh.positions[i + 1]),
                f64::from(mesh.positions[i + 2]),
            ))
        };

        for face in mesh.indices.chunks_exact(3) {
            builder.add_triangle(vertex(face[0]), vertex(face[1]), vertex(face[2]), material)?;
            added += 1;
        }
        log::debug!("Model '{}': {} faces", model.name, mesh.indices.len() / 3);
    }

    if added == 0 {
        return Err(LoadError::NoGeometry);
    }
    log::info!("Loaded {} triangles from {} models", added, models.len());
    Ok(added)
}
