// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Mask
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Disk and outside-of-disk masks on coordinate grids.

use lens_types::grid::{ApertureMask, CoordinateGrid};
use ndarray::Zip;

/// Points within Euclidean distance `radius` (inclusive) of the center.
pub fn disk_mask(grid: &CoordinateGrid, center_x: f64, center_y: f64, radius: f64) -> ApertureMask {
    let r2 = radius * radius;
    let selected = Zip::from(&grid.x)
        .and(&grid.y)
        .map_collect(|&x, &y| (x - center_x).powi(2) + (y - center_y).powi(2) <= r2);
    ApertureMask::new(selected)
}

/// Points strictly farther than `radius` from the center; the complement of
/// [`disk_mask`].
pub fn outside_mask(
    grid: &CoordinateGrid,
    center_x: f64,
    center_y: f64,
    radius: f64,
) -> ApertureMask {
    let r2 = radius * radius;
    let selected = Zip::from(&grid.x)
        .and(&grid.y)
        .map_collect(|&x, &y| (x - center_x).powi(2) + (y - center_y).powi(2) > r2);
    ApertureMask::new(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_and_outside_partition_grid() {
        let grid = CoordinateGrid::new(21, 0.1).unwrap();
        let inside = disk_mask(&grid, 0.0, 0.0, 0.5);
        let outside = outside_mask(&grid, 0.0, 0.0, 0.5);
        assert_eq!(inside.count() + outside.count(), grid.len());
        assert_eq!(outside.complement(), inside);
    }

    #[test]
    fn test_disk_inclusive_boundary() {
        let grid = CoordinateGrid::new(3, 1.0).unwrap();
        // Radius 1 picks the center plus its four neighbours.
        assert_eq!(disk_mask(&grid, 0.0, 0.0, 1.0).count(), 5);
        assert_eq!(disk_mask(&grid, 0.0, 0.0, 0.0).count(), 1);
    }

    #[test]
    fn test_zero_radius_even_grid_is_empty() {
        let grid = CoordinateGrid::new(4, 1.0).unwrap();
        assert_eq!(disk_mask(&grid, 0.0, 0.0, 0.0).count(), 0);
        assert_eq!(outside_mask(&grid, 0.0, 0.0, 0.0).count(), 16);
    }

    #[test]
    fn test_offset_center() {
        let grid = CoordinateGrid::centered_on(11, 0.2, 3.0, -2.0).unwrap();
        let mask = disk_mask(&grid, 3.0, -2.0, 0.45);
        // 0.45 / 0.2 = 2.25 pixels: the 21-point digital disk of radius 2
        assert_eq!(mask.count(), 21);
    }
}
