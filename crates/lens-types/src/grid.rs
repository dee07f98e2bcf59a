// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Grid
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Regular sample grids and masks aligned with them.

use crate::error::{LensError, LensResult};
use ndarray::{Array1, Array2};

/// Square grid of `num × num` sample points, flattened row-major
/// (x varies fastest), spaced by `spacing` and centered on `(center_x, center_y)`.
#[derive(Debug, Clone)]
pub struct CoordinateGrid {
    pub num: usize,
    pub spacing: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub x: Array1<f64>, // [num * num]
    pub y: Array1<f64>, // [num * num]
}

impl CoordinateGrid {
    /// Grid centered on the origin.
    ///
    /// Coordinates are `(i - (num - 1) / 2) * spacing`, so an even `num` has no
    /// sample exactly at the center.
    pub fn new(num: usize, spacing: f64) -> LensResult<Self> {
        if num == 0 {
            return Err(LensError::InvalidArgument(
                "grid requires at least one pixel per side".to_string(),
            ));
        }
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(LensError::InvalidArgument(format!(
                "grid spacing must be finite and positive, got {spacing}"
            )));
        }

        let shift = (num as f64 - 1.0) / 2.0;
        let n_points = num * num;
        let mut x = Array1::zeros(n_points);
        let mut y = Array1::zeros(n_points);
        for iy in 0..num {
            for ix in 0..num {
                let k = iy * num + ix;
                x[k] = (ix as f64 - shift) * spacing;
                y[k] = (iy as f64 - shift) * spacing;
            }
        }

        Ok(CoordinateGrid {
            num,
            spacing,
            center_x: 0.0,
            center_y: 0.0,
            x,
            y,
        })
    }

    /// Grid translated so that its center lands on `(center_x, center_y)`.
    pub fn centered_on(num: usize, spacing: f64, center_x: f64, center_y: f64) -> LensResult<Self> {
        Ok(Self::new(num, spacing)?.recentered(center_x, center_y))
    }

    /// Translate every sample by `(dx, dy)`.
    pub fn recentered(mut self, dx: f64, dy: f64) -> Self {
        self.x.mapv_inplace(|v| v + dx);
        self.y.mapv_inplace(|v| v + dy);
        self.center_x += dx;
        self.center_y += dy;
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Coordinates of flattened sample `k`.
    pub fn point(&self, k: usize) -> (f64, f64) {
        (self.x[k], self.y[k])
    }

    /// Half-width of the sampled area, measured to the outermost samples.
    pub fn half_extent(&self) -> f64 {
        (self.num as f64 - 1.0) / 2.0 * self.spacing
    }

    /// Reshape a field aligned with this grid into a `[num, num]` image
    /// (rows = y, cols = x).
    pub fn to_image(&self, field: &Array1<f64>) -> LensResult<Array2<f64>> {
        if field.len() != self.len() {
            return Err(LensError::ShapeMismatch {
                what: "field vs grid".to_string(),
                expected: self.len(),
                got: field.len(),
            });
        }
        Ok(Array2::from_shape_fn((self.num, self.num), |(iy, ix)| {
            field[iy * self.num + ix]
        }))
    }
}

/// Boolean selection aligned with a [`CoordinateGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApertureMask {
    pub selected: Array1<bool>,
}

impl ApertureMask {
    pub fn new(selected: Array1<bool>) -> Self {
        ApertureMask { selected }
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected points.
    pub fn count(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }

    pub fn complement(&self) -> Self {
        ApertureMask {
            selected: self.selected.mapv(|s| !s),
        }
    }

    /// Mean of `field` over the selected points, `None` if nothing is selected.
    pub fn mean_of(&self, field: &Array1<f64>) -> LensResult<Option<f64>> {
        if field.len() != self.len() {
            return Err(LensError::ShapeMismatch {
                what: "field vs mask".to_string(),
                expected: self.len(),
                got: field.len(),
            });
        }
        let (sum, count) = self
            .selected
            .iter()
            .zip(field.iter())
            .filter(|(&s, _)| s)
            .fold((0.0, 0usize), |(sum, count), (_, &v)| (sum + v, count + 1));
        Ok((count > 0).then(|| sum / count as f64))
    }
}
