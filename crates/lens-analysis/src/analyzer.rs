// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Profile Analyzer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use lens_models::evaluator::LensEvaluator;
use lens_types::config::AnalysisConfig;
use lens_types::error::LensResult;
use lens_types::params::{ComponentSelector, LensParameterSet};
use lens_types::profile::LocalLensingEffect;

/// Read-only analysis front end over a lens model.
///
/// The analyzer holds no mutable state; every operation takes the parameter
/// set it works on, so one analyzer can serve concurrent callers.
pub struct ProfileAnalyzer<'a, M: LensEvaluator + ?Sized> {
    pub(crate) model: &'a M,
    pub(crate) config: AnalysisConfig,
}

impl<'a, M: LensEvaluator + ?Sized> ProfileAnalyzer<'a, M> {
    pub fn new(model: &'a M) -> Self {
        ProfileAnalyzer {
            model,
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(model: &'a M, config: AnalysisConfig) -> LensResult<Self> {
        config.validate()?;
        Ok(ProfileAnalyzer { model, config })
    }

    pub fn model(&self) -> &M {
        self.model
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Deflection, convergence and shear at `(ra, dec)` from the selected
    /// components, typically the perturbers around a main deflector.
    pub fn local_lensing_effect(
        &self,
        params: &LensParameterSet,
        ra: f64,
        dec: f64,
        selector: &ComponentSelector,
    ) -> LensResult<LocalLensingEffect> {
        let (alpha_x, alpha_y) = self.model.deflection_at(ra, dec, params, selector)?;
        let h = self.model.hessian_at(ra, dec, params, selector)?;
        Ok(LocalLensingEffect {
            alpha_x,
            alpha_y,
            kappa_ext: (h.f_xx + h.f_yy) / 2.0,
            shear1: (h.f_xx - h.f_yy) / 2.0,
            shear2: h.f_xy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_models::evaluator::LensModel;
    use lens_models::kind::ProfileKind;
    use lens_types::params::ComponentParams;

    #[test]
    fn test_local_effect_of_shear_and_sheet() {
        let model = LensModel::new(&[
            ProfileKind::Sis,
            ProfileKind::Shear,
            ProfileKind::Convergence,
        ])
        .unwrap();
        let params = LensParameterSet::new(vec![
            ComponentParams::new()
                .with("theta_E", 1.0)
                .with("center_x", 0.0)
                .with("center_y", 0.0),
            ComponentParams::new().with("gamma1", 0.05).with("gamma2", -0.02),
            ComponentParams::new().with("kappa", 0.1),
        ]);
        let analyzer = ProfileAnalyzer::new(&model);
        let ext = ComponentSelector::from_indices([1, 2]);
        let effect = analyzer.local_lensing_effect(&params, 0.4, 1.3, &ext).unwrap();
        assert!((effect.kappa_ext - 0.1).abs() < 1e-12);
        assert!((effect.shear1 - 0.05).abs() < 1e-12);
        assert!((effect.shear2 + 0.02).abs() < 1e-12);
        // Shear deflection is linear, sheet deflection is κ·x.
        assert!((effect.alpha_x - (0.05 * 0.4 - 0.02 * 1.3 + 0.1 * 0.4)).abs() < 1e-12);
        assert!((effect.alpha_y - (-0.02 * 0.4 - 0.05 * 1.3 + 0.1 * 1.3)).abs() < 1e-12);
    }

    #[test]
    fn test_with_config_validates() {
        let model = LensModel::new(&[ProfileKind::Sis]).unwrap();
        let mut config = AnalysisConfig::default();
        config.radial.azimuthal_samples = 0;
        assert!(ProfileAnalyzer::with_config(&model, config).is_err());
        let analyzer = ProfileAnalyzer::new(&model);
        assert_eq!(analyzer.config().einstein.grid_num, 200);
        assert_eq!(analyzer.model().component_count(), 1);
    }
}
