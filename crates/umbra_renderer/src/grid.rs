//! Radiance grids and their text output format.
//!
//! A grid is written as three blocks, one per channel:
//!
//! ```text
//! wavelength r
//! <width values>      (one line per row, `height` lines)
//!
//! wavelength g
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use umbra_math::Vec3;

use crate::error::{OutputError, OutputResult};

/// Channel names in output order.
pub const CHANNEL_NAMES: [&str; 3] = ["r", "g", "b"];

/// Row-major grid of per-channel radiance.
#[derive(Debug, Clone, PartialEq)]
pub struct RadianceGrid {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl RadianceGrid {
    /// Create a new grid filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Vec3::ZERO)
    }

    /// Create a new grid with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: Vec3) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width as usize * height as usize],
        }
    }

    /// Get the pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, value: Vec3) {
        let index = self.index(x, y);
        self.pixels[index] = value;
    }

    /// Values of one channel (0 = r, 1 = g, 2 = b) in row-major order.
    pub fn channel(&self, k: usize) -> impl Iterator<Item = f64> + '_ {
        self.pixels.iter().map(move |p| p[k])
    }

    /// Write the grid in the per-channel text format.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let width = self.width.max(1) as usize;
        for (k, name) in CHANNEL_NAMES.iter().enumerate() {
            writeln!(out, "wavelength {}", name)?;
            for row in self.pixels.chunks(width) {
                let mut first = true;
                for pixel in row {
                    if !first {
                        write!(out, " ")?;
                    }
                    write!(out, "{}", pixel[k])?;
                    first = false;
                }
                writeln!(out)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Write `grid` to the file at `path`.
pub fn write_grid<P: AsRef<Path>>(path: P, grid: &RadianceGrid) -> OutputResult<()> {
    let path = path.as_ref();
    let to_error = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    grid.write_to(&mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    Ok(())
}

/// Output path for the grid of camera `index`.
///
/// Camera 0 writes to `base`; camera `k` writes to `<stem>_<k>.<ext>`.
pub fn output_path(base: &Path, index: usize) -> PathBuf {
    if index == 0 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index),
    };
    base.with_file_name(name)
}
