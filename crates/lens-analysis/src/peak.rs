// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Convergence Peak
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::analyzer::ProfileAnalyzer;
use lens_models::evaluator::LensEvaluator;
use lens_types::error::{LensError, LensResult};
use lens_types::grid::CoordinateGrid;
use lens_types::params::{ComponentSelector, LensParameterSet};
use lens_types::profile::ConvergencePeak;
use ndarray::Array1;

/// Options of the peak search. Unset grid values come from the analyzer
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct PeakOptions {
    pub selector: ComponentSelector,
    pub grid_num: Option<usize>,
    pub grid_spacing: Option<f64>,
    /// Center of the search grid, the origin when unset.
    pub initial_center: Option<(f64, f64)>,
}

impl PeakOptions {
    pub fn with_selector(mut self, selector: ComponentSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_grid(mut self, grid_num: usize, grid_spacing: f64) -> Self {
        self.grid_num = Some(grid_num);
        self.grid_spacing = Some(grid_spacing);
        self
    }

    pub fn starting_at(mut self, center_x: f64, center_y: f64) -> Self {
        self.initial_center = Some((center_x, center_y));
        self
    }
}

/// Indices of all entries equal to the maximum, in order, and the maximum.
/// NaN entries are ignored; an all-NaN or empty field has no maxima.
pub(crate) fn grid_maxima(field: &Array1<f64>) -> (Vec<usize>, f64) {
    let max = field
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    let indices = field
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == max)
        .map(|(k, _)| k)
        .collect();
    (indices, max)
}

impl<M: LensEvaluator + ?Sized> ProfileAnalyzer<'_, M> {
    /// Grid position(s) of maximum convergence.
    ///
    /// The resolution is the grid spacing; every tied maximum is reported.
    pub fn convergence_peak(
        &self,
        params: &LensParameterSet,
        options: &PeakOptions,
    ) -> LensResult<ConvergencePeak> {
        let grid_num = options.grid_num.unwrap_or(self.config.peak.grid_num);
        let grid_spacing = options.grid_spacing.unwrap_or(self.config.peak.grid_spacing);
        let (cx, cy) = options.initial_center.unwrap_or((0.0, 0.0));

        let grid = CoordinateGrid::centered_on(grid_num, grid_spacing, cx, cy)?;
        let kappa = self
            .model
            .convergence(&grid.x, &grid.y, params, &options.selector)?;

        let (indices, value) = grid_maxima(&kappa);
        if indices.is_empty() {
            return Err(LensError::DegenerateMask {
                center_x: cx,
                center_y: cy,
                radius: grid.half_extent(),
            });
        }
        Ok(ConvergencePeak {
            positions: indices.into_iter().map(|k| grid.point(k)).collect(),
            value,
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
    fn test_grid_maxima_ties_and_nan() {
        let field = Array1::from(vec![1.0, f64::NAN, 3.0, 2.0, 3.0]);
        let (idx, max) = grid_maxima(&field);
        assert_eq!(idx, vec![2, 4]);
        assert_eq!(max, 3.0);
        let (idx, _) = grid_maxima(&Array1::from(vec![f64::NAN]));
        assert!(idx.is_empty());
    }

    #[test]
    fn test_soft_point_mass_peak() {
        let model = LensModel::new(&[ProfileKind::SoftPointMass]).unwrap();
        let analyzer = ProfileAnalyzer::new(&model);
        let params = LensParameterSet::new(vec![ComponentParams::new()
            .with("theta_E", 1.0)
            .with("s", 0.05)
            .with("center_x", 0.132)
            .with("center_y", -0.071)]);
        let opts = PeakOptions::default().with_grid(101, 0.01);
        let peak = analyzer.convergence_peak(&params, &opts).unwrap();
        assert!(peak.is_unique());
        let (x, y) = peak.first().unwrap();
        assert!((x - 0.13).abs() < 0.01 && (y + 0.07).abs() < 0.01, "peak at ({x}, {y})");
    }

    #[test]
    fn test_symmetric_peak_reports_ties() {
        // Even grid around the center: four pixels share the maximum.
        let model = LensModel::new(&[ProfileKind::GaussianKappa]).unwrap();
        let analyzer = ProfileAnalyzer::new(&model);
        let params = LensParameterSet::new(vec![ComponentParams::new()
            .with("amp", 1.0)
            .with("sigma", 0.2)]);
        let opts = PeakOptions::default().with_grid(10, 0.1);
        let peak = analyzer.convergence_peak(&params, &opts).unwrap();
        assert_eq!(peak.positions.len(), 4);
        let (mx, my) = peak.mean_position().unwrap();
        assert!(mx.abs() < 1e-12 && my.abs() < 1e-12);
    }

    #[test]
    fn test_initial_center_shifts_grid() {
        let model = LensModel::new(&[ProfileKind::GaussianKappa]).unwrap();
        let analyzer = ProfileAnalyzer::new(&model);
        let params = LensParameterSet::new(vec![ComponentParams::new()
            .with("amp", 1.0)
            .with("sigma", 0.3)
            .with("center_x", 2.0)
            .with("center_y", 1.0)]);
        let near = PeakOptions::default().with_grid(41, 0.05).starting_at(2.0, 1.0);
        let peak = analyzer.convergence_peak(&params, &near).unwrap();
        let (x, y) = peak.first().unwrap();
        assert!((x - 2.0).abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
    }
}
