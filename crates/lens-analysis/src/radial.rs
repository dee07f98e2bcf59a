// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Radial Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::analyzer::ProfileAnalyzer;
use lens_math::sampling::points_on_circle_around;
use lens_models::evaluator::LensEvaluator;
use lens_types::error::{LensError, LensResult};
use lens_types::params::{ComponentSelector, LensParameterSet};
use lens_types::profile::RadialProfile;
use rayon::prelude::*;

impl<M: LensEvaluator + ?Sized> ProfileAnalyzer<'_, M> {
    /// Azimuthally averaged convergence at each radius in `radii`.
    ///
    /// Each circle is sampled at `radial.azimuthal_samples` equally spaced
    /// angles. Output order matches `radii`.
    pub fn radial_profile(
        &self,
        radii: &[f64],
        params: &LensParameterSet,
        center: Option<(f64, f64)>,
        selector: &ComponentSelector,
    ) -> LensResult<RadialProfile> {
        let (cx, cy) = params.resolve_center(center)?;
        if let Some(&bad) = radii.iter().find(|r| !r.is_finite()) {
            return Err(LensError::InvalidArgument(format!(
                "radial profile radius must be finite, got {bad}"
            )));
        }
        let n_azimuth = self.config.radial.azimuthal_samples;

        let values = radii
            .par_iter()
            .map(|&r| {
                let (x, y) = points_on_circle_around(r, n_azimuth, cx, cy);
                let kappa = self.model.convergence(&x, &y, params, selector)?;
                Ok(kappa.mean().unwrap_or(f64::NAN))
            })
            .collect::<LensResult<Vec<f64>>>()?;

        Ok(RadialProfile {
            radii: radii.to_vec(),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_models::evaluator::LensModel;
    use lens_models::kind::ProfileKind;
    use lens_types::params::ComponentParams;

    fn sis_model() -> (LensModel, LensParameterSet) {
        let model = LensModel::new(&[ProfileKind::Sis]).unwrap();
        let params = LensParameterSet::new(vec![ComponentParams::new()
            .with("theta_E", 1.0)
            .with("center_x", 0.3)
            .with("center_y", 0.1)]);
        (model, params)
    }

    #[test]
    fn test_sis_profile_matches_analytic() {
        let (model, params) = sis_model();
        let analyzer = ProfileAnalyzer::new(&model);
        let radii = [0.1, 0.5, 1.0, 3.0];
        let profile = analyzer
            .radial_profile(&radii, &params, None, &ComponentSelector::All)
            .unwrap();
        assert_eq!(profile.len(), 4);
        for (r, k) in profile.iter() {
            assert!((k - 1.0 / (2.0 * r)).abs() < 1e-10, "κ({r}) = {k}");
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let (model, params) = sis_model();
        let analyzer = ProfileAnalyzer::new(&model);
        let radii = [2.0, 0.2, 1.1];
        let profile = analyzer
            .radial_profile(&radii, &params, None, &ComponentSelector::All)
            .unwrap();
        assert_eq!(profile.radii, radii.to_vec());
        assert!(profile.values[1] > profile.values[2]);
        assert!(profile.values[2] > profile.values[0]);
        assert!(!profile.is_monotonic());
    }

    #[test]
    fn test_off_center_averaging() {
        // Circle around a point away from the lens center.
        let (model, params) = sis_model();
        let analyzer = ProfileAnalyzer::new(&model);
        let profile = analyzer
            .radial_profile(&[0.5], &params, Some((3.0, 3.0)), &ComponentSelector::All)
            .unwrap();
        assert!(profile.values[0].is_finite() && profile.values[0] > 0.0);
    }

    #[test]
    fn test_non_finite_radius_rejected() {
        let (model, params) = sis_model();
        let analyzer = ProfileAnalyzer::new(&model);
        assert!(analyzer
            .radial_profile(&[1.0, f64::NAN], &params, None, &ComponentSelector::All)
            .is_err());
        let empty = analyzer
            .radial_profile(&[], &params, None, &ComponentSelector::All)
            .unwrap();
        assert!(empty.is_empty());
    }
}
