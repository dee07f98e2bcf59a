// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Profiles
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-point lens profile families.

pub mod gaussian;
pub mod interpolated;
pub mod point_mass;
pub mod sheet;
pub mod shear;
pub mod sis;
pub mod spp;

use crate::kind::ProfileKind;
use lens_types::error::LensResult;
use lens_types::params::ComponentParams;

/// Radii below this are treated as this radius to keep singular profiles finite.
pub const MIN_RADIUS: f64 = 1e-9;

/// Second derivatives of the lensing potential at one point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hessian {
    pub f_xx: f64,
    pub f_xy: f64,
    pub f_yx: f64,
    pub f_yy: f64,
}

impl Hessian {
    pub fn convergence(&self) -> f64 {
        (self.f_xx + self.f_yy) / 2.0
    }

    pub fn scaled(self, s: f64) -> Self {
        Hessian {
            f_xx: self.f_xx * s,
            f_xy: self.f_xy * s,
            f_yx: self.f_yx * s,
            f_yy: self.f_yy * s,
        }
    }
}

impl std::ops::AddAssign for Hessian {
    fn add_assign(&mut self, rhs: Self) {
        self.f_xx += rhs.f_xx;
        self.f_xy += rhs.f_xy;
        self.f_yx += rhs.f_yx;
        self.f_yy += rhs.f_yy;
    }
}

/// A single lens component family, evaluated point by point.
pub trait LensProfile: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> ProfileKind;

    /// Deflection angle (α_x, α_y) at `(x, y)`.
    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)>;

    fn hessian(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<Hessian>;

    /// Convergence κ = (f_xx + f_yy) / 2.
    fn convergence(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<f64> {
        Ok(self.hessian(x, y, params)?.convergence())
    }
}

/// Offsets from the component center and the (clamped) radius.
pub(crate) fn centered(x: f64, y: f64, params: &ComponentParams) -> (f64, f64, f64) {
    let (cx, cy) = params.center_or_origin();
    let dx = x - cx;
    let dy = y - cy;
    (dx, dy, dx.hypot(dy).max(MIN_RADIUS))
}

/// Deflection of a circularly symmetric profile with radial deflection `alpha_r`.
pub(crate) fn radial_deflection(dx: f64, dy: f64, r: f64, alpha_r: f64) -> (f64, f64) {
    (alpha_r * dx / r, alpha_r * dy / r)
}

/// Hessian of a circularly symmetric profile from its radial deflection and
/// convergence at radius `r`, using dα/dr = 2κ - α/r.
pub(crate) fn radial_hessian(dx: f64, dy: f64, r: f64, alpha_r: f64, kappa_r: f64) -> Hessian {
    // At the exact center pick the x axis; the trace is direction independent.
    let (dx, dy) = if dx.hypot(dy) < MIN_RADIUS {
        (r, 0.0)
    } else {
        (dx, dy)
    };
    let r2 = dx * dx + dy * dy;
    let cos2 = dx * dx / r2;
    let sin2 = dy * dy / r2;
    let cs = dx * dy / r2;

    let tangential = alpha_r / r;
    let radial = 2.0 * kappa_r - tangential;
    let f_xy = (radial - tangential) * cs;
    Hessian {
        f_xx: radial * cos2 + tangential * sin2,
        f_xy,
        f_yx: f_xy,
        f_yy: radial * sin2 + tangential * cos2,
    }
}
