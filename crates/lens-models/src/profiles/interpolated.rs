// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Interpolated Potential
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pixelated lensing potential.
//!
//! Deflection and Hessian maps are precomputed by finite differences of the
//! potential and bilinearly interpolated. Outside the map the edge values are
//! held constant. Parameters: `center_x`, `center_y` (default 0) shift the map;
//! `scale_factor` multiplies all derived quantities and is mandatory for
//! `INTERPOL_SCALED`.

use super::{Hessian, LensProfile};
use crate::kind::ProfileKind;
use lens_math::interp::{pixel_gradient, PixelAxes};
use lens_types::error::{LensError, LensResult};
use lens_types::grid::CoordinateGrid;
use lens_types::params::ComponentParams;
use ndarray::Array2;

#[derive(Debug, Clone)]
pub struct InterpolatedPotential {
    kind: ProfileKind,
    axes: PixelAxes,
    alpha_x: Array2<f64>,
    alpha_y: Array2<f64>,
    f_xx: Array2<f64>,
    f_xy: Array2<f64>,
    f_yx: Array2<f64>,
    f_yy: Array2<f64>,
}

impl InterpolatedPotential {
    /// Build from a potential map `psi` of shape [ny, nx] on `axes`.
    pub fn from_potential(kind: ProfileKind, axes: PixelAxes, psi: &Array2<f64>) -> LensResult<Self> {
        if !kind.is_interpolated() {
            return Err(LensError::InvalidArgument(format!(
                "{kind} is not a pixelated profile kind"
            )));
        }
        if psi.dim() != (axes.ny, axes.nx) {
            return Err(LensError::ShapeMismatch {
                what: "potential map vs pixel axes".to_string(),
                expected: axes.ny * axes.nx,
                got: psi.len(),
            });
        }

        let (alpha_x, alpha_y) = pixel_gradient(psi, &axes);
        let (f_xx, f_xy) = pixel_gradient(&alpha_x, &axes);
        let (f_yx, f_yy) = pixel_gradient(&alpha_y, &axes);

        Ok(InterpolatedPotential {
            kind,
            axes,
            alpha_x,
            alpha_y,
            f_xx,
            f_xy,
            f_yx,
            f_yy,
        })
    }

    /// Sample `potential(x, y)` on a square grid and build the profile.
    pub fn sampled<F>(kind: ProfileKind, grid: &CoordinateGrid, potential: F) -> LensResult<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        let axes = PixelAxes::from_grid(grid)?;
        let psi = Array2::from_shape_fn((axes.ny, axes.nx), |(iy, ix)| {
            potential(axes.x_at(ix), axes.y_at(iy))
        });
        Self::from_potential(kind, axes, &psi)
    }

    pub fn axes(&self) -> &PixelAxes {
        &self.axes
    }

    fn local(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64, f64)> {
        let (cx, cy) = params.center_or_origin();
        let scale = match self.kind {
            ProfileKind::InterpolScaled => params.require("scale_factor")?,
            _ => params.get_or("scale_factor", 1.0),
        };
        Ok((x - cx, y - cy, scale))
    }
}

impl LensProfile for InterpolatedPotential {
    fn kind(&self) -> ProfileKind {
        self.kind
    }

    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)> {
        let (lx, ly, scale) = self.local(x, y, params)?;
        Ok((
            scale * self.axes.bilinear(&self.alpha_x, lx, ly),
            scale * self.axes.bilinear(&self.alpha_y, lx, ly),
        ))
    }

    fn hessian(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<Hessian> {
        let (lx, ly, scale) = self.local(x, y, params)?;
        Ok(Hessian {
            f_xx: self.axes.bilinear(&self.f_xx, lx, ly),
            f_xy: self.axes.bilinear(&self.f_xy, lx, ly),
            f_yx: self.axes.bilinear(&self.f_yx, lx, ly),
            f_yy: self.axes.bilinear(&self.f_yy, lx, ly),
        }
        .scaled(scale))
    }
}
