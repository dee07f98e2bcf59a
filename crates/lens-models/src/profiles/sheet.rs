// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Convergence Sheet
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Uniform mass sheet: ψ = κ/2 · r², relative to (ra_0, dec_0).

use super::{Hessian, LensProfile};
use crate::kind::ProfileKind;
use lens_types::error::LensResult;
use lens_types::params::ComponentParams;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvergenceSheet;

impl LensProfile for ConvergenceSheet {
    fn kind(&self) -> ProfileKind {
        ProfileKind::Convergence
    }

    fn deflection(&self, x: f64, y: f64, params: &ComponentParams) -> LensResult<(f64, f64)> {
        let kappa = params.require("kappa")?;
        let dx = x - params.get_or("ra_0", 0.0);
        let dy = y - params.get_or("dec_0", 0.0);
        Ok((kappa * dx, kappa * dy))
    }

    fn hessian(&self, _x: f64, _y: f64, params: &ComponentParams) -> LensResult<Hessian> {
        let kappa = params.require("kappa")?;
        Ok(Hessian {
            f_xx: kappa,
            f_xy: 0.0,
            f_yx: 0.0,
            f_yy: kappa,
        })
    }

    fn convergence(&self, _x: f64, _y: f64, params: &ComponentParams) -> LensResult<f64> {
        params.require("kappa")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_is_uniform() {
        let p = ComponentParams::new().with("kappa", 0.3);
        assert_eq!(ConvergenceSheet.convergence(5.0, -7.0, &p).unwrap(), 0.3);
        let (ax, ay) = ConvergenceSheet.deflection(2.0, -1.0, &p).unwrap();
        assert!((ax - 0.6).abs() < 1e-15 && (ay + 0.3).abs() < 1e-15);
    }
}
