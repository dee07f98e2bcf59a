// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Background Cosmology
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use lens_math::quad::simpson;
use lens_types::constants::C_LIGHT;
use lens_types::error::{LensError, LensResult};
use serde::{Deserialize, Serialize};

/// Simpson intervals per unit redshift for the distance integral.
const INTERVALS_PER_UNIT_Z: f64 = 2000.0;

/// Flat ΛCDM background without radiation. Distances are in Mpc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatLambdaCdm {
    /// Hubble constant (km/s/Mpc)
    pub h0: f64,
    pub omega_m: f64,
}

impl Default for FlatLambdaCdm {
    fn default() -> Self {
        FlatLambdaCdm {
            h0: 70.0,
            omega_m: 0.3,
        }
    }
}

impl FlatLambdaCdm {
    pub fn new(h0: f64, omega_m: f64) -> LensResult<Self> {
        if !(h0.is_finite() && h0 > 0.0) {
            return Err(LensError::InvalidArgument(format!(
                "Hubble constant must be positive, got {h0}"
            )));
        }
        if !(0.0..=1.0).contains(&omega_m) {
            return Err(LensError::InvalidArgument(format!(
                "matter density must lie in [0, 1] for a flat universe, got {omega_m}"
            )));
        }
        Ok(FlatLambdaCdm { h0, omega_m })
    }

    /// Hubble distance c / H0 (Mpc).
    pub fn hubble_distance(&self) -> f64 {
        C_LIGHT / 1000.0 / self.h0
    }

    /// E(z) = H(z) / H0
    pub fn efunc(&self, z: f64) -> f64 {
        (self.omega_m * (1.0 + z).powi(3) + (1.0 - self.omega_m)).sqrt()
    }

    /// Line-of-sight comoving distance between two redshifts (Mpc).
    pub fn comoving_distance_between(&self, z1: f64, z2: f64) -> f64 {
        if z2 <= z1 {
            return 0.0;
        }
        let n = ((z2 - z1) * INTERVALS_PER_UNIT_Z).ceil() as usize;
        self.hubble_distance() * simpson(|z| 1.0 / self.efunc(z), z1, z2, n)
    }

    pub fn comoving_distance(&self, z: f64) -> f64 {
        self.comoving_distance_between(0.0, z)
    }

    pub fn angular_diameter_distance(&self, z: f64) -> f64 {
        self.comoving_distance(z) / (1.0 + z)
    }

    /// Angular diameter distance from `z1` to `z2 > z1` (flat geometry).
    pub fn angular_diameter_distance_z1z2(&self, z1: f64, z2: f64) -> f64 {
        self.comoving_distance_between(z1, z2) / (1.0 + z2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_einstein_de_sitter_closed_form() {
        let cosmo = FlatLambdaCdm::new(70.0, 1.0).unwrap();
        for &z in &[0.1, 0.5, 1.0, 3.0] {
            let exact = 2.0 * cosmo.hubble_distance() * (1.0 - 1.0 / (1.0f64 + z).sqrt());
            let d = cosmo.comoving_distance(z);
            assert!((d - exact).abs() / exact < 1e-9, "z = {z}: {d} vs {exact}");
        }
    }

    #[test]
    fn test_reference_distances() {
        let cosmo = FlatLambdaCdm::default();
        assert!((cosmo.comoving_distance(1.0) - 3303.8).abs() < 1.0);
        assert!((cosmo.angular_diameter_distance(0.5) - 1259.1).abs() < 1.0);
    }

    #[test]
    fn test_distance_between_redshifts() {
        let cosmo = FlatLambdaCdm::default();
        let (zl, zs) = (0.5, 2.0);
        let d_ls = cosmo.angular_diameter_distance_z1z2(zl, zs);
        let expected = (cosmo.comoving_distance(zs) - cosmo.comoving_distance(zl)) / (1.0 + zs);
        assert!((d_ls - expected).abs() < 1e-6);
        assert_eq!(cosmo.angular_diameter_distance_z1z2(zs, zl), 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(FlatLambdaCdm::new(0.0, 0.3).is_err());
        assert!(FlatLambdaCdm::new(70.0, 1.5).is_err());
    }
}
