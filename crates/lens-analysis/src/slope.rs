// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Profile Slope
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
use ndarray::{Array1, Zip};

impl<M: LensEvaluator + ?Sized> ProfileAnalyzer<'_, M> {
    /// Logarithmic power-law slope γ of the mass profile at the Einstein
    /// radius, from deflection magnitudes on two concentric circles.
    ///
    /// γ = 2 - ⟨d ln α / d ln r⟩, so an isothermal profile gives 2. The
    /// Einstein radius is taken with default options around the primary
    /// deflector; its failure is returned unchanged.
    pub fn profile_slope(
        &self,
        params: &LensParameterSet,
        selector: &ComponentSelector,
        num_points: usize,
    ) -> LensResult<f64> {
        if num_points == 0 {
            return Err(LensError::InvalidArgument(
                "profile slope needs at least one azimuthal sample".to_string(),
            ));
        }
        let theta_e = self.einstein_scale(params)?;
        let (x0, y0) = params.primary_center()?;
        let dr = self.config.slope.delta_r;

        let alpha_e = self.deflection_magnitude(theta_e, num_points, x0, y0, params, selector)?;
        let alpha_dr =
            self.deflection_magnitude(theta_e + dr, num_points, x0, y0, params, selector)?;

        let log_step = ((theta_e + dr) / theta_e).ln();
        let slopes = Zip::from(&alpha_dr)
            .and(&alpha_e)
            .map_collect(|&outer, &inner| (outer / inner).ln() / log_step);
        let mean = slopes.mean().unwrap_or(f64::NAN);
        if !mean.is_finite() {
            return Err(LensError::Model(format!(
                "deflection vanishes on the Einstein circle (θ_E = {theta_e})"
            )));
        }
        Ok(2.0 - mean)
    }

    /// [`Self::profile_slope`] over all components with the configured
    /// number of samples.
    pub fn profile_slope_default(&self, params: &LensParameterSet) -> LensResult<f64> {
        self.profile_slope(params, &ComponentSelector::All, self.config.slope.num_points)
    }

    fn deflection_magnitude(
        &self,
        radius: f64,
        num_points: usize,
        x0: f64,
        y0: f64,
        params: &LensParameterSet,
        selector: &ComponentSelector,
    ) -> LensResult<Array1<f64>> {
        let (x, y) = points_on_circle_around(radius, num_points, x0, y0);
        let (ax, ay) = self.model.deflection(&x, &y, params, selector)?;
        Ok(Zip::from(&ax).and(&ay).map_collect(|&a, &b| a.hypot(b)))
    }
}
