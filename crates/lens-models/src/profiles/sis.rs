// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — SIS Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Singular isothermal sphere: κ = θ_E / 2r, |α| = θ_E.

use super::{centered, radial_deflection, radial_hessian, Hessian, LensProfile};
use crate::kind::ProfileKind;
use lens_types::error::LensResult;
use lens_types::params::ComponentParams;

#[derive(Debug, Clone, Copy, Default)]
pub struct Sis;

impl LensProfile for Sis {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Sis
    }

    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)> {
        let theta_e = params.require("theta_E")?;
        let (dx, dy, r) = centered(x, y, params);
        Ok(radial_deflection(dx, dy, r, theta_e))
    }

    fn hessian(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<Hessian> {
        let theta_e = params.require("theta_E")?;
        let (dx, dy, r) = centered(x, y, params);
        Ok(radial_hessian(dx, dy, r, theta_e, theta_e / (2.0 * r)))
    }
}
