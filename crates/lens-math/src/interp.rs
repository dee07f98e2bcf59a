// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Interpolation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bilinear interpolation and finite differences on pixel maps.

use lens_types::error::{LensError, LensResult};
use lens_types::grid::CoordinateGrid;
use ndarray::{s, Array2, Axis, Zip};

/// Axes of a regular pixel map: `ny` rows along y, `nx` columns along x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelAxes {
    pub nx: usize,
    pub ny: usize,
    pub x_min: f64,
    pub y_min: f64,
    pub dx: f64,
    pub dy: f64,
}

impl PixelAxes {
    pub fn new(nx: usize, ny: usize, x_min: f64, y_min: f64, dx: f64, dy: f64) -> LensResult<Self> {
        if nx < 2 || ny < 2 {
            return Err(LensError::InvalidArgument(format!(
                "pixel map needs at least 2x2 pixels, got {nx}x{ny}"
            )));
        }
        if !(dx > 0.0 && dy > 0.0) {
            return Err(LensError::InvalidArgument(format!(
                "pixel sizes must be positive, got dx={dx}, dy={dy}"
            )));
        }
        Ok(PixelAxes {
            nx,
            ny,
            x_min,
            y_min,
            dx,
            dy,
        })
    }

    /// Axes matching the layout of a square coordinate grid.
    pub fn from_grid(grid: &CoordinateGrid) -> LensResult<Self> {
        let x_min = grid.x.iter().copied().fold(f64::INFINITY, f64::min);
        let y_min = grid.y.iter().copied().fold(f64::INFINITY, f64::min);
        Self::new(grid.num, grid.num, x_min, y_min, grid.spacing, grid.spacing)
    }

    pub fn x_at(&self, ix: usize) -> f64 {
        self.x_min + ix as f64 * self.dx
    }

    pub fn y_at(&self, iy: usize) -> f64 {
        self.y_min + iy as f64 * self.dy
    }

    /// Bilinear sample of `map` ([ny, nx]) at `(x, y)`, holding the edge
    /// pixels constant outside the map.
    pub fn bilinear(&self, map: &Array2<f64>, x: f64, y: f64) -> f64 {
        let (ix, tx) = locate(x, self.x_min, self.dx, self.nx);
        let (iy, ty) = locate(y, self.y_min, self.dy, self.ny);
        let cell = map.slice(s![iy..iy + 2, ix..ix + 2]);
        let lower = (1.0 - tx) * cell[[0, 0]] + tx * cell[[0, 1]];
        let upper = (1.0 - tx) * cell[[1, 0]] + tx * cell[[1, 1]];
        (1.0 - ty) * lower + ty * upper
    }
}

/// Lower pixel index of the interpolation cell containing `coord` and the
/// fractional offset inside it.
fn locate(coord: f64, origin: f64, step: f64, n: usize) -> (usize, f64) {
    let f = (coord - origin) / step;
    let i = (f.floor() as isize).clamp(0, n as isize - 2) as usize;
    (i, (f - i as f64).clamp(0.0, 1.0))
}

/// Finite-difference gradient `(∂/∂x, ∂/∂y)` of a pixel map: centered in
/// the interior, one-sided on the border pixels.
pub fn pixel_gradient(map: &Array2<f64>, axes: &PixelAxes) -> (Array2<f64>, Array2<f64>) {
    (
        lane_derivative(map, Axis(1), axes.dx),
        lane_derivative(map, Axis(0), axes.dy),
    )
}

fn lane_derivative(map: &Array2<f64>, axis: Axis, step: f64) -> Array2<f64> {
    let mut out = Array2::zeros(map.raw_dim());
    Zip::from(map.lanes(axis))
        .and(out.lanes_mut(axis))
        .for_each(|src, mut dst| {
            let n = src.len();
            if n < 2 {
                return;
            }
            dst[0] = (src[1] - src[0]) / step;
            dst[n - 1] = (src[n - 1] - src[n - 2]) / step;
            for i in 1..n - 1 {
                dst[i] = (src[i + 1] - src[i - 1]) / (2.0 * step);
            }
        });
    out
}
