// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Aperture Mass Fraction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::analyzer::ProfileAnalyzer;
use lens_math::mask::disk_mask;
use lens_models::evaluator::LensEvaluator;
use lens_types::error::{LensError, LensResult};
use lens_types::grid::CoordinateGrid;
use lens_types::params::{ComponentSelector, LensParameterSet};
use rayon::prelude::*;

impl<M: LensEvaluator + ?Sized> ProfileAnalyzer<'_, M> {
    /// Mean convergence of each component, evaluated alone, inside the disk
    /// of `radius` around `center`.
    ///
    /// The grid has `grid_resolution` pixels per side and spans the aperture
    /// diameter. One value per component, in component order.
    pub fn mass_fraction_within_radius(
        &self,
        params: &LensParameterSet,
        center: (f64, f64),
        radius: f64,
        grid_resolution: usize,
    ) -> LensResult<Vec<f64>> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(LensError::InvalidArgument(format!(
                "aperture radius must be finite and positive, got {radius}"
            )));
        }
        if grid_resolution == 0 {
            return Err(LensError::InvalidArgument(
                "aperture grid needs at least one pixel".to_string(),
            ));
        }
        let (cx, cy) = center;
        let spacing = 2.0 * radius / grid_resolution as f64;
        let grid = CoordinateGrid::centered_on(grid_resolution, spacing, cx, cy)?;
        let mask = disk_mask(&grid, cx, cy, radius);
        if mask.count() == 0 {
            return Err(LensError::DegenerateMask {
                center_x: cx,
                center_y: cy,
                radius,
            });
        }

        (0..params.len())
            .into_par_iter()
            .map(|i| {
                let kappa = self
                    .model
                    .convergence(&grid.x, &grid.y, params, &ComponentSelector::only(i))?;
                mask.mean_of(&kappa)?.ok_or(LensError::DegenerateMask {
                    center_x: cx,
                    center_y: cy,
                    radius,
                })
            })
            .collect()
    }

    /// [`Self::mass_fraction_within_radius`] at the configured resolution.
    pub fn mass_fraction_within_radius_default(
        &self,
        params: &LensParameterSet,
        center: (f64, f64),
        radius: f64,
    ) -> LensResult<Vec<f64>> {
        self.mass_fraction_within_radius(
            params,
            center,
            radius,
            self.config.mass_fraction.grid_resolution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_models::evaluator::LensModel;
    use lens_models::kind::ProfileKind;
    use lens_types::params::ComponentParams;

    fn sis_and_sheet() -> (LensModel, LensParameterSet) {
        let model = LensModel::new(&[ProfileKind::Sis, ProfileKind::Convergence]).unwrap();
        let params = LensParameterSet::new(vec![
            ComponentParams::new()
                .with("theta_E", 1.0)
                .with("center_x", 0.0)
                .with("center_y", 0.0),
            ComponentParams::new().with("kappa", 0.25),
        ]);
        (model, params)
    }

    #[test]
    fn test_per_component_means() {
        let (model, params) = sis_and_sheet();
        let analyzer = ProfileAnalyzer::new(&model);
        let fractions = analyzer
            .mass_fraction_within_radius_default(&params, (0.0, 0.0), 1.0)
            .unwrap();
        assert_eq!(fractions.len(), 2);
        // Mean SIS convergence inside θ_E is one.
        assert!((fractions[0] - 1.0).abs() < 0.03, "SIS mean {}", fractions[0]);
        assert!((fractions[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_aperture() {
        let (model, params) = sis_and_sheet();
        let analyzer = ProfileAnalyzer::new(&model);
        assert!(analyzer
            .mass_fraction_within_radius(&params, (0.0, 0.0), 0.0, 100)
            .is_err());
        assert!(analyzer
            .mass_fraction_within_radius(&params, (0.0, 0.0), 1.0, 0)
            .is_err());
    }

    #[test]
    fn test_component_failure_propagates() {
        let model = LensModel::new(&[ProfileKind::Sis, ProfileKind::Convergence]).unwrap();
        let params = LensParameterSet::new(vec![
            ComponentParams::new().with("theta_E", 1.0),
            ComponentParams::new(),
        ]);
        let analyzer = ProfileAnalyzer::new(&model);
        let err = analyzer
            .mass_fraction_within_radius(&params, (0.0, 0.0), 1.0, 20)
            .unwrap_err();
        assert!(matches!(err, LensError::MissingParameter { .. }));
    }
}
