// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Gaussian Convergence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Circular Gaussian convergence with integrated amplitude `amp`:
//! κ = amp / (2πσ²) · exp(-r² / 2σ²).

use super::{centered, radial_deflection, radial_hessian, Hessian, LensProfile};
use crate::kind::ProfileKind;
use lens_types::error::{LensError, LensResult};
use lens_types::params::ComponentParams;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianKappa;

fn gauss_params(params: &ComponentParams) -> LensResult<(f64, f64)> {
    let amp = params.require("amp")?;
    let sigma = params.require("sigma")?;
    if !(sigma > 0.0) {
        return Err(LensError::Model(format!(
            "Gaussian width must be positive, got {sigma}"
        )));
    }
    Ok((amp, sigma))
}

/// |α|(r) = M(<r) / (π r) with M(<r) = amp · (1 - exp(-r²/2σ²)).
fn alpha_radial(amp: f64, sigma: f64, r: f64) -> f64 {
    let enclosed = -amp * (-(r * r) / (2.0 * sigma * sigma)).exp_m1();
    enclosed / (PI * r)
}

impl LensProfile for GaussianKappa {
    fn kind(&self) -> ProfileKind {
        ProfileKind::GaussianKappa
    }

    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)> {
        let (amp, sigma) = gauss_params(params)?;
        let (dx, dy, r) = centered(x, y, params);
        Ok(radial_deflection(dx, dy, r, alpha_radial(amp, sigma, r)))
    }

    fn hessian(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<Hessian> {
        let (amp, sigma) = gauss_params(params)?;
        let (dx, dy, r) = centered(x, y, params);
        let kappa = amp / (2.0 * PI * sigma * sigma) * (-(r * r) / (2.0 * sigma * sigma)).exp();
        Ok(radial_hessian(
            dx,
            dy,
            r,
            alpha_radial(amp, sigma, r),
            kappa,
        ))
    }
}
