// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Property-Based Tests (proptest) for lens-cosmo
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for lens-cosmo using proptest.
//!
//! Covers: distance monotonicity and Hubble scaling, unit conversions.

use lens_cosmo::{FlatLambdaCdm, LensCosmo};
use proptest::prelude::*;

proptest! {
    /// Comoving distance grows with redshift.
    #[test]
    fn comoving_distance_monotonic(
        omega_m in 0.05f64..1.0,
        z1 in 0.01f64..3.0,
        dz in 0.01f64..2.0,
    ) {
        let cosmo = FlatLambdaCdm::new(70.0, omega_m).unwrap();
        prop_assert!(cosmo.comoving_distance(z1 + dz) > cosmo.comoving_distance(z1));
    }

    /// All distances, and hence D_dt, scale as 1 / H0.
    #[test]
    fn time_delay_distance_scales_with_hubble(
        h0 in 50.0f64..90.0,
        z_lens in 0.1f64..1.0,
        dz in 0.2f64..2.0,
    ) {
        let reference = LensCosmo::new(z_lens, z_lens + dz, &FlatLambdaCdm::new(70.0, 0.3).unwrap())
            .unwrap();
        let scaled = LensCosmo::new(z_lens, z_lens + dz, &FlatLambdaCdm::new(h0, 0.3).unwrap())
            .unwrap();
        let ratio = scaled.d_dt() / reference.d_dt();
        prop_assert!((ratio - 70.0 / h0).abs() < 1e-9);
    }

    /// Critical density times the physical area of θ_E gives the enclosed mass.
    #[test]
    fn mass_in_theta_e_quadratic(theta_e in 0.1f64..3.0) {
        let lc = LensCosmo::new(0.4, 1.5, &FlatLambdaCdm::default()).unwrap();
        let m1 = lc.mass_in_theta_e(1.0);
        let m = lc.mass_in_theta_e(theta_e);
        prop_assert!((m / m1 - theta_e * theta_e).abs() < 1e-9 * theta_e * theta_e);
    }
}
