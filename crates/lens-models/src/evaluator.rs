// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Evaluator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The lens model capability consumed by the profile analysis.

use crate::kind::ProfileKind;
use crate::profiles::{Hessian, LensProfile};
use lens_types::error::{LensError, LensResult};
use lens_types::params::{ComponentSelector, LensParameterSet};
use ndarray::Array1;

/// Hessian components over a coordinate array.
#[derive(Debug, Clone)]
pub struct HessianField {
    pub f_xx: Array1<f64>,
    pub f_xy: Array1<f64>,
    pub f_yx: Array1<f64>,
    pub f_yy: Array1<f64>,
}

/// Deflection, convergence and Hessian of a (multi-component) lens model at
/// arbitrary coordinates, restricted to a component subset.
pub trait LensEvaluator: Sync {
    /// Number of components the parameter sets must provide.
    fn component_count(&self) -> usize;

    fn convergence(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<Array1<f64>>;

    fn deflection(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<(Array1<f64>, Array1<f64>)>;

    fn hessian(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<HessianField>;

    /// Whether component 0 is a pixelated profile without an analytic center.
    fn primary_is_interpolated(&self) -> bool;

    fn convergence_at(
        &self,
        x: f64,
        y: f64,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<f64> {
        let k = self.convergence(&Array1::from_elem(1, x), &Array1::from_elem(1, y), params, selector)?;
        Ok(k[0])
    }

    fn deflection_at(
        &self,
        x: f64,
        y: f64,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<(f64, f64)> {
        let (ax, ay) =
            self.deflection(&Array1::from_elem(1, x), &Array1::from_elem(1, y), params, selector)?;
        Ok((ax[0], ay[0]))
    }

    fn hessian_at(
        &self,
        x: f64,
        y: f64,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<Hessian> {
        let h = self.hessian(&Array1::from_elem(1, x), &Array1::from_elem(1, y), params, selector)?;
        Ok(Hessian {
            f_xx: h.f_xx[0],
            f_xy: h.f_xy[0],
            f_yx: h.f_yx[0],
            f_yy: h.f_yy[0],
        })
    }
}

/// Sum of independent lens components. The profile families are fixed at
/// construction; parameters are supplied per call.
#[derive(Debug)]
pub struct LensModel {
    profiles: Vec<Box<dyn LensProfile>>,
}

impl LensModel {
    /// Model made of analytic profile families.
    pub fn new(kinds: &[ProfileKind]) -> LensResult<Self> {
        let profiles = kinds
            .iter()
            .map(|kind| kind.analytic_profile())
            .collect::<LensResult<Vec<_>>>()?;
        Ok(LensModel { profiles })
    }

    /// Model from already constructed profiles (e.g. pixelated ones).
    pub fn from_profiles(profiles: Vec<Box<dyn LensProfile>>) -> Self {
        LensModel { profiles }
    }

    pub fn kinds(&self) -> Vec<ProfileKind> {
        self.profiles.iter().map(|p| p.kind()).collect()
    }

    fn check_inputs(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<()> {
        if x.len() != y.len() {
            return Err(LensError::ShapeMismatch {
                what: "x vs y coordinates".to_string(),
                expected: x.len(),
                got: y.len(),
            });
        }
        if params.len() != self.profiles.len() {
            return Err(LensError::ShapeMismatch {
                what: "parameter records vs lens components".to_string(),
                expected: self.profiles.len(),
                got: params.len(),
            });
        }
        selector.validate(self.profiles.len())
    }

    /// Selected `(profile, params)` pairs.
    fn selected<'a>(
        &'a self,
        params: &'a LensParameterSet,
        selector: &'a ComponentSelector,
    ) -> impl Iterator<Item = (&'a dyn LensProfile, &'a lens_types::params::ComponentParams)> + 'a
    {
        self.profiles
            .iter()
            .zip(params.iter())
            .enumerate()
            .filter(move |(i, _)| selector.includes(*i))
            .map(|(_, (profile, p))| (&**profile, p))
    }
}

impl LensEvaluator for LensModel {
    fn component_count(&self) -> usize {
        self.profiles.len()
    }

    fn convergence(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<Array1<f64>> {
        self.check_inputs(x, y, params, selector)?;
        let mut kappa = Array1::zeros(x.len());
        for (profile, p) in self.selected(params, selector) {
            for k in 0..x.len() {
                kappa[k] += profile.convergence(x[k], y[k], p)?;
            }
        }
        Ok(kappa)
    }

    fn deflection(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<(Array1<f64>, Array1<f64>)> {
        self.check_inputs(x, y, params, selector)?;
        let mut alpha_x = Array1::zeros(x.len());
        let mut alpha_y = Array1::zeros(x.len());
        for (profile, p) in self.selected(params, selector) {
            for k in 0..x.len() {
                let (ax, ay) = profile.deflection(x[k], y[k], p)?;
                alpha_x[k] += ax;
                alpha_y[k] += ay;
            }
        }
        Ok((alpha_x, alpha_y))
    }

    fn hessian(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<HessianField> {
        self.check_inputs(x, y, params, selector)?;
        let n = x.len();
        let mut acc = vec![Hessian::default(); n];
        for (profile, p) in self.selected(params, selector) {
            for k in 0..n {
                acc[k] += profile.hessian(x[k], y[k], p)?;
            }
        }
        Ok(HessianField {
            f_xx: acc.iter().map(|h| h.f_xx).collect(),
            f_xy: acc.iter().map(|h| h.f_xy).collect(),
            f_yx: acc.iter().map(|h| h.f_yx).collect(),
            f_yy: acc.iter().map(|h| h.f_yy).collect(),
        })
    }

    fn primary_is_interpolated(&self) -> bool {
        self.profiles
            .first()
            .is_some_and(|p| p.kind().is_interpolated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::interpolated::InterpolatedPotential;
    use lens_types::grid::CoordinateGrid;
    use lens_types::params::ComponentParams;

    fn sis_plus_sheet() -> (LensModel, LensParameterSet) {
        let model = LensModel::new(&[ProfileKind::Sis, ProfileKind::Convergence]).unwrap();
        let params = LensParameterSet::new(vec![
            ComponentParams::new()
                .with("theta_E", 1.0)
                .with("center_x", 0.0)
                .with("center_y", 0.0),
            ComponentParams::new().with("kappa", 0.2),
        ]);
        (model, params)
    }

    #[test]
    fn test_components_add_up() {
        let (model, params) = sis_plus_sheet();
        let x = Array1::from(vec![0.5, 2.0]);
        let y = Array1::from(vec![0.0, 0.0]);
        let all = model.convergence(&x, &y, &params, &ComponentSelector::All).unwrap();
        let sis = model.convergence(&x, &y, &params, &ComponentSelector::only(0)).unwrap();
        let sheet = model.convergence(&x, &y, &params, &ComponentSelector::only(1)).unwrap();
        for k in 0..2 {
            assert!((all[k] - sis[k] - sheet[k]).abs() < 1e-14);
        }
        assert!((sis[0] - 1.0).abs() < 1e-12);
        assert!((sheet[1] - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let (model, params) = sis_plus_sheet();
        let k = model
            .convergence_at(1.0, 1.0, &params, &ComponentSelector::from_indices(Vec::new()))
            .unwrap();
        assert_eq!(k, 0.0);
    }

    #[test]
    fn test_hessian_trace_matches_convergence() {
        let (model, params) = sis_plus_sheet();
        let h = model.hessian_at(0.7, -0.4, &params, &ComponentSelector::All).unwrap();
        let k = model.convergence_at(0.7, -0.4, &params, &ComponentSelector::All).unwrap();
        assert!((h.convergence() - k).abs() < 1e-12);
    }

    #[test]
    fn test_input_validation() {
        let (model, params) = sis_plus_sheet();
        let x = Array1::zeros(3);
        let y = Array1::zeros(2);
        assert!(matches!(
            model.convergence(&x, &y, &params, &ComponentSelector::All),
            Err(LensError::ShapeMismatch { .. })
        ));
        let short = LensParameterSet::new(vec![ComponentParams::new()]);
        assert!(model.deflection_at(0.0, 0.0, &short, &ComponentSelector::All).is_err());
        assert!(matches!(
            model.convergence_at(0.0, 0.0, &params, &ComponentSelector::only(5)),
            Err(LensError::ComponentOutOfRange { index: 5, len: 2 })
        ));
    }

    #[test]
    fn test_capability_failure_propagates() {
        let (model, params) = sis_plus_sheet();
        let mut components: Vec<ComponentParams> = params.iter().cloned().collect();
        components[1] = ComponentParams::new();
        let broken = LensParameterSet::new(components);
        assert!(matches!(
            model.convergence_at(1.0, 0.0, &broken, &ComponentSelector::All),
            Err(LensError::MissingParameter { .. })
        ));
        // Only the SIS is evaluated, so the broken sheet is never touched.
        assert!(model
            .convergence_at(1.0, 0.0, &broken, &ComponentSelector::only(0))
            .is_ok());
    }

    #[test]
    fn test_primary_interpolated_flag() {
        let (model, _) = sis_plus_sheet();
        assert!(!model.primary_is_interpolated());
        let grid = CoordinateGrid::new(11, 0.2).unwrap();
        let pix = InterpolatedPotential::sampled(ProfileKind::Interpol, &grid, |x, y| x * x + y * y)
            .unwrap();
        let model = LensModel::from_profiles(vec![Box::new(pix)]);
        assert!(model.primary_is_interpolated());
        assert_eq!(model.kinds(), vec![ProfileKind::Interpol]);
    }
}
