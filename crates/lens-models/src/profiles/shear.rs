// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — External Shear
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! External shear: ψ = γ₁/2 · (x² - y²) + γ₂ · x y, relative to (ra_0, dec_0).

use super::{Hessian, LensProfile};
use crate::kind::ProfileKind;
use lens_types::error::LensResult;
use lens_types::params::ComponentParams;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalShear;

impl LensProfile for ExternalShear {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Shear
    }

    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)> {
        let g1 = params.require("gamma1")?;
        let g2 = params.require("gamma2")?;
        let dx = x - params.get_or("ra_0", 0.0);
        let dy = y - params.get_or("dec_0", 0.0);
        Ok((g1 * dx + g2 * dy, g2 * dx - g1 * dy))
    }

    fn hessian(&self, _x: f64, _y: f64, params: &ComponentParams) -> LensResult<Hessian> {
        let g1 = params.require("gamma1")?;
        let g2 = params.require("gamma2")?;
        Ok(Hessian {
            f_xx: g1,
            f_xy: g2,
            f_yx: g2,
            f_yy: -g1,
        })
    }

    fn convergence(&self, _x: f64, _y: f64, params: &ComponentParams) -> LensResult<f64> {
        params.require("gamma1")?;
        params.require("gamma2")?;
        Ok(0.0)
    }
}
