// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Softened Point Mass
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Point mass with a softening core `s`:
//! ψ = θ_E²/2 · ln(r² + s²), κ = θ_E² s² / (r² + s²)².

use super::{centered, radial_deflection, radial_hessian, Hessian, LensProfile};
use crate::kind::ProfileKind;
use lens_types::error::{LensError, LensResult};
use lens_types::params::ComponentParams;

#[derive(Debug, Clone, Copy, Default)]
pub struct SoftPointMass;

fn mass_params(params: &ComponentParams) -> LensResult<(f64, f64)> {
    let theta_e = params.require("theta_E")?;
    let s = params.require("s")?;
    if !(s > 0.0) {
        return Err(LensError::Model(format!(
            "softening length must be positive, got {s}"
        )));
    }
    Ok((theta_e, s))
}

impl LensProfile for SoftPointMass {
    fn kind(&self) -> ProfileKind {
        ProfileKind::SoftPointMass
    }

    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)> {
        let (theta_e, s) = mass_params(params)?;
        let (dx, dy, r) = centered(x, y, params);
        let alpha = theta_e * theta_e * r / (r * r + s * s);
        Ok(radial_deflection(dx, dy, r, alpha))
    }

    fn hessian(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<Hessian> {
        let (theta_e, s) = mass_params(params)?;
        let (dx, dy, r) = centered(x, y, params);
        let q = r * r + s * s;
        let alpha = theta_e * theta_e * r / q;
        let kappa = theta_e * theta_e * s * s / (q * q);
        Ok(radial_hessian(dx, dy, r, alpha, kappa))
    }
}
