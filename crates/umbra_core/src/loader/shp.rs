//! Cornell-box `.shp` loader.
//!
//! The format is line oriented. Only four kinds of marker lines matter:
//!
//! - `define breps brs_<N>` starts a part drawn with material `N`
//! - `Number of vertices` is followed by `x y z` lines
//! - `Number of triangles` is followed by `a b c` lines indexing the vertices
//!   listed for the current part
//! - `Number of parts` ends whatever section is open
//!
//! Any other line that does not start with a number closes the open section.

use std::fs;
use std::path::Path;

use umbra_math::Vec3;

use crate::light::Light;
use crate::material::{Material, MaterialId};
use crate::scene::SceneBuilder;

use super::{LoadError, LoadResult};

/// Total radiant intensity of the Cornell-box light (W/sr).
pub const CORNELL_LIGHT_INTENSITY: f64 = 1.816936e7;

/// Relative red/green/blue weights of the Cornell-box light.
pub const CORNELL_LIGHT_WEIGHTS: Vec3 = Vec3::new(900.0, 600.0, 600.0);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Vertices,
    Triangles,
}

/// Load a `.shp` file into `builder`, returning the number of triangles added.
pub fn load_shp<P: AsRef<Path>>(path: P, builder: &mut SceneBuilder) -> LoadResult<usize> {
    let path = path.as_ref();
    log::info!("Loading shp file: {:?}", path);
    let content = fs::read_to_string(path)?;
    load_shp_from_str(&content, builder)
}

/// Load `.shp` content into `builder`, returning the number of triangles added.
///
/// Materials referenced by part ids must already be present in `builder`.
pub fn load_shp_from_str(content: &str, builder: &mut SceneBuilder) -> LoadResult<usize> {
    let mut points: Vec<Vec3> = Vec::new();
    let mut part_material: Option<MaterialId> = None;
    let mut part_base = 0;
    let mut section = Section::None;
    let mut added = 0;

    for (i, raw) in content.lines().enumerate() {
        let line_num = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.contains("Number of parts") {
            section = Section::None;
            continue;
        }
        if line.contains("Number of triangles") {
            log::debug!("line {}: triangle section", line_num);
            section = Section::Triangles;
            continue;
        }
        if line.contains("Number of vertices") {
            log::debug!("line {}: vertex section", line_num);
            section = Section::Vertices;
            part_base = points.len();
            continue;
        }
        if line.contains("define breps brs_") {
            let id = parse_part_id(line, line_num)?;
            log::debug!("line {}: part with material {}", line_num, id);
            part_material = Some(MaterialId::new(id));
            section = Section::None;
            continue;
        }

        if section == Section::None {
            continue;
        }
        if !starts_with_number(line) {
            log::warn!(
                "line {}: skipping malformed line in {:?} section: {:?}",
                line_num,
                section,
                line
            );
            section = Section::None;
            continue;
        }

        match section {
            Section::Vertices => {
                let [x, y, z] = parse_three::<f64>(line, line_num)?;
                points.push(Vec3::new(x, y, z));
            }
            Section::Triangles => {
                let material = part_material.ok_or_else(|| LoadError::Parse {
                    line: line_num,
                    message: "triangle outside of a part".to_string(),
                })?;
                let indices = parse_three::<usize>(line, line_num)?;
                let mut corners = [Vec3::ZERO; 3];
                for (corner, index) in corners.iter_mut().zip(indices) {
                    *corner = *points.get(part_base + index).ok_or(LoadError::InvalidIndex {
                        line: line_num,
                        index: part_base + index,
                        count: points.len(),
                    })?;
                }
                builder.add_triangle(corners[0], corners[1], corners[2], material)?;
                added += 1;
            }
            Section::None => {}
        }
    }

    log::info!("Loaded {} vertices, {} triangles", points.len(), added);
    Ok(added)
}

/// Start a Cornell-box scene: the five reference materials and the overhead
/// light, then the geometry from the `.shp` file at `path`.
///
/// No camera is added.
pub fn cornell_box<P: AsRef<Path>>(path: P) -> LoadResult<SceneBuilder> {
    let path = path.as_ref();
    log::info!("Loading Cornell box: {:?}", path);
    let content = fs::read_to_string(path)?;
    cornell_box_from_str(&content)
}

/// Same as [`cornell_box`] for in-memory content.
pub fn cornell_box_from_str(content: &str) -> LoadResult<SceneBuilder> {
    let mut builder = SceneBuilder::new();

    let colors = [
        Vec3::new(0.238, 0.199, 0.158),
        Vec3::new(0.096, 0.412, 0.089),
        Vec3::new(0.441, 0.044, 0.046),
        Vec3::new(0.104, 0.38, 0.44),
        Vec3::new(0.104, 0.38, 0.44),
    ];
    for color in colors {
        builder.add_material(Material::new(color, Vec3::ONE));
    }

    builder.add_light(Light::from_total_intensity(
        Vec3::new(278.0, 545.0, -279.5),
        CORNELL_LIGHT_INTENSITY,
        CORNELL_LIGHT_WEIGHTS,
    ));

    if load_shp_from_str(content, &mut builder)? == 0 {
        return Err(LoadError::NoGeometry);
    }
    Ok(builder)
}

/// Extract `N` from `define breps brs_N`.
fn parse_part_id(line: &str, line_num: usize) -> LoadResult<usize> {
    let token = line.rsplit('_').next().unwrap_or("").trim();
    token.parse().map_err(|_| LoadError::Parse {
        line: line_num,
        message: format!("invalid part id '{}'", token),
    })
}

fn starts_with_number(line: &str) -> bool {
    line.chars()
        .next()
        .map_or(false, |c| c.is_ascii_digit() || c == '-' || c == '+' || c == '.')
}

/// Parse the first three whitespace-separated values of `line`.
fn parse_three<T: std::str::FromStr>(line: &str, line_num: usize) -> LoadResult<[T; 3]> {
    let mut values = line.split_whitespace().map(|token| {
        token.parse::<T>().map_err(|_| LoadError::Parse {
            line: line_num,
            message: format!("invalid number '{}'", token),
        })
    });

    let mut next = || {
        values.next().unwrap_or_else(|| {
            Err(LoadError::Parse {
                line: line_num,
                message: "expected three values".to_string(),
            })
        })
    };
    Ok([next()?, next()?, next()?])
}
