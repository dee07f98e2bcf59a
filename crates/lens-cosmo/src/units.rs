// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Lensing Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conversions between angular lensing quantities and physical units for a
//! fixed lens and source redshift.

use crate::background::FlatLambdaCdm;
use lens_types::constants::{ARCSEC_RAD, C_LIGHT, DAY_S, G_NEWTON, MPC_M, M_SUN};
use lens_types::error::{LensError, LensResult};
use std::f64::consts::PI;

/// Angular diameter distances of a lens system (Mpc) and the derived unit
/// conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensCosmo {
    pub z_lens: f64,
    pub z_source: f64,
    d_d: f64,
    d_s: f64,
    d_ds: f64,
}

impl LensCosmo {
    pub fn new(z_lens: f64, z_source: f64, cosmology: &FlatLambdaCdm) -> LensResult<Self> {
        if !(z_lens > 0.0 && z_source > z_lens && z_source.is_finite()) {
            return Err(LensError::InvalidArgument(format!(
                "need 0 < z_lens < z_source, got z_lens = {z_lens}, z_source = {z_source}"
            )));
        }
        Ok(LensCosmo {
            z_lens,
            z_source,
            d_d: cosmology.angular_diameter_distance(z_lens),
            d_s: cosmology.angular_diameter_distance(z_source),
            d_ds: cosmology.angular_diameter_distance_z1z2(z_lens, z_source),
        })
    }

    /// Observer to deflector.
    pub fn d_d(&self) -> f64 {
        self.d_d
    }

    /// Observer to source.
    pub fn d_s(&self) -> f64 {
        self.d_s
    }

    /// Deflector to source.
    pub fn d_ds(&self) -> f64 {
        self.d_ds
    }

    /// Time-delay distance (1 + z_d) D_d D_s / D_ds.
    pub fn d_dt(&self) -> f64 {
        (1.0 + self.z_lens) * self.d_d * self.d_s / self.d_ds
    }

    /// Physical size (Mpc) of an angle (arcsec) at the deflector.
    pub fn arcsec2phys_lens(&self, arcsec: f64) -> f64 {
        arcsec * ARCSEC_RAD * self.d_d
    }

    /// Physical size (Mpc) of an angle (arcsec) at the source.
    pub fn arcsec2phys_source(&self, arcsec: f64) -> f64 {
        arcsec * ARCSEC_RAD * self.d_s
    }

    /// Critical surface density Σ_crit = c² D_s / (4πG D_d D_ds) in M_sun/Mpc².
    pub fn epsilon_crit(&self) -> f64 {
        let const_si = C_LIGHT * C_LIGHT / (4.0 * PI * G_NEWTON);
        let conversion = MPC_M / M_SUN;
        self.d_s / (self.d_d * self.d_ds) * const_si * conversion
    }

    /// Mass (M_sun) enclosed by an Einstein radius given in arcsec.
    pub fn mass_in_theta_e(&self, theta_e: f64) -> f64 {
        let r = self.arcsec2phys_lens(theta_e);
        PI * r * r * self.epsilon_crit()
    }

    /// Convert a Fermat potential (arcsec²) to a time delay in days, with the
    /// time-delay distance rescaled by (1 - κ_ext).
    pub fn time_delay_units(&self, fermat_potential: f64, kappa_ext: f64) -> f64 {
        let d_dt = self.d_dt() * (1.0 - kappa_ext) * MPC_M;
        d_dt / C_LIGHT * fermat_potential * ARCSEC_RAD * ARCSEC_RAD / DAY_S
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> LensCosmo {
        LensCosmo::new(0.5, 2.0, &FlatLambdaCdm::default()).unwrap()
    }

    #[test]
    fn test_distance_ordering() {
        let lc = system();
        assert!(lc.d_d() > 0.0 && lc.d_ds() > 0.0);
        assert!(lc.d_s() > lc.d_ds());
        assert!(lc.d_dt() > lc.d_d());
    }

    #[test]
    fn test_time_delay_scaling() {
        let lc = system();
        let dt = lc.time_delay_units(1.0, 0.0);
        // D_dt of a few Gpc gives tens of days per arcsec² of Fermat potential.
        assert!(dt > 10.0 && dt < 100.0, "dt = {dt}");
        assert!((lc.time_delay_units(1.0, 0.1) - 0.9 * dt).abs() < 1e-9 * dt);
        assert!((lc.time_delay_units(-2.0, 0.0) + 2.0 * dt).abs() < 1e-9 * dt);
    }

    #[test]
    fn test_critical_density_magnitude() {
        let lc = system();
        // Σ_crit of a galaxy-scale lens is ~3e15 M_sun/Mpc².
        let sigma = lc.epsilon_crit();
        assert!(sigma > 1e15 && sigma < 1e16, "Σ_crit = {sigma:e}");
        // One-arcsecond Einstein radius holds ~1e11 M_sun.
        let m = lc.mass_in_theta_e(1.0);
        assert!(m > 1e10 && m < 1e12, "M = {m:e}");
    }

    #[test]
    fn test_redshift_order_enforced() {
        assert!(LensCosmo::new(1.0, 0.5, &FlatLambdaCdm::default()).is_err());
        assert!(LensCosmo::new(0.0, 0.5, &FlatLambdaCdm::default()).is_err());
    }
}
