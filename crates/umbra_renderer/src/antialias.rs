//! Supersampling box filter.

use umbra_math::Vec3;

use crate::grid::RadianceGrid;

/// Reduce a `(2w + 1) x (2h + 1)` sample grid to a `w x h` grid.
///
/// Output pixel (x, y) is the mean of the 3x3 samples centered on sample
/// (2x + 1, 2y + 1).
pub fn box_filter(samples: &RadianceGrid) -> RadianceGrid {
    let width = samples.width.saturating_sub(1) / 2;
    let height = samples.height.saturating_sub(1) / 2;
    let mut filtered = RadianceGrid::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let mut sum = Vec3::ZERO;
            for sy in 2 * y..=2 * y + 2 {
                for sx in 2 * x..=2 * x + 2 {
                    sum += samples.get(sx, sy);
                }
            }
            filtered.set(x, y, sum / 9.0);
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_samples_stay_constant() {
        let c = Vec3::new(0.3, 1.7, 42.0);
        let samples = RadianceGrid::filled(9, 7, c);
        let filtered = box_filter(&samples);

        assert_eq!((filtered.width, filtered.height), (4, 3));
        for pixel in &filtered.pixels {
            assert!((*pixel - c).length() < 1e-12);
        }
    }

    #[test]
    fn test_neighborhood_average() {
        // 5x3 samples -> 2x1 pixels
        let mut samples = RadianceGrid::new(5, 3);
        for y in 0..3 {
            for x in 0..5 {
                samples.set(x, y, Vec3::splat((y * 5 + x) as f64));
            }
        }
        let filtered = box_filter(&samples);

        assert_eq!((filtered.width, filtered.height), (2, 1));
        // Left pixel covers columns 0..=2: mean of 0,1,2,5,6,7,10,11,12 = 6
        assert_eq!(filtered.get(0, 0), Vec3::splat(6.0));
        // Right pixel covers columns 2..=4: mean = 8
        assert_eq!(filtered.get(1, 0), Vec3::splat(8.0));
    }
}
