// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — SPP Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spherical power law: κ = (3 - γ)/2 · (θ_E / r)^(γ - 1).
//!
//! γ = 2 is the singular isothermal sphere.

use super::{centered, radial_deflection, radial_hessian, Hessian, LensProfile};
use crate::kind::ProfileKind;
use lens_types::error::{LensError, LensResult};
use lens_types::params::ComponentParams;

/// Allowed slope range; γ outside (1, 3) has no finite projected mass profile.
const GAMMA_MIN: f64 = 1.0;
const GAMMA_MAX: f64 = 3.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Spp;

fn slope_params(params: &ComponentParams) -> LensResult<(f64, f64)> {
    let theta_e = params.require("theta_E")?;
    let gamma = params.require("gamma")?;
    if !(gamma > GAMMA_MIN && gamma < GAMMA_MAX) {
        return Err(LensError::Model(format!(
            "SPP slope gamma must lie in ({GAMMA_MIN}, {GAMMA_MAX}), got {gamma}"
        )));
    }
    Ok((theta_e, gamma))
}

/// |α|(r) = θ_E^(γ-1) · r^(2-γ)
fn alpha_radial(theta_e: f64, gamma: f64, r: f64) -> f64 {
    theta_e.powf(gamma - 1.0) * r.powf(2.0 - gamma)
}

impl LensProfile for Spp {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Spp
    }

    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)> {
        let (theta_e, gamma) = slope_params(params)?;
        let (dx, dy, r) = centered(x, y, params);
        Ok(radial_deflection(dx, dy, r, alpha_radial(theta_e, gamma, r)))
    }

    fn hessian(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<Hessian> {
        let (theta_e, gamma) = slope_params(params)?;
        let (dx, dy, r) = centered(x, y, params);
        let kappa = (3.0 - gamma) / 2.0 * (theta_e / r).powf(gamma - 1.0);
        Ok(radial_hessian(
            dx,
            dy,
            r,
            alpha_radial(theta_e, gamma, r),
            kappa,
        ))
    }
}
