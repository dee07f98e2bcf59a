// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Multi-Gaussian Decomposition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::analyzer::ProfileAnalyzer;
use lens_math::mge::mge_1d;
use lens_math::sampling::log_radii;
use lens_models::evaluator::LensEvaluator;
use lens_types::error::LensResult;
use lens_types::params::{ComponentSelector, LensParameterSet};
use lens_types::profile::GaussianMixtureProfile;

impl<M: LensEvaluator + ?Sized> ProfileAnalyzer<'_, M> {
    /// Concentric Gaussian approximation of the radial convergence profile.
    ///
    /// The profile is sampled on `mge.num_radii` log-spaced radii from
    /// `10^log_r_min · θ_E` to `10^log_r_max · θ_E` and handed to the
    /// multi-Gaussian expansion. A missing Einstein radius is returned as is.
    pub fn multi_gaussian_decomposition(
        &self,
        params: &LensParameterSet,
        center: Option<(f64, f64)>,
        selector: &ComponentSelector,
        n_components: usize,
    ) -> LensResult<GaussianMixtureProfile> {
        let center = params.resolve_center(center)?;
        let theta_e = self.einstein_scale(params)?;

        let mge = &self.config.mge;
        let radii = log_radii(mge.log_r_min, mge.log_r_max, mge.num_radii, theta_e)?;
        let radii = radii.to_vec();
        let profile = self.radial_profile(&radii, params, Some(center), selector)?;

        let fit = mge_1d(&profile.radii, &profile.values, n_components)?;
        Ok(GaussianMixtureProfile {
            amplitudes: fit.amplitudes,
            sigmas: fit.sigmas,
            normalization: fit.normalization,
            center,
        })
    }

    /// [`Self::multi_gaussian_decomposition`] over all components around the
    /// primary deflector with the configured component count.
    pub fn multi_gaussian_decomposition_default(
        &self,
        params: &LensParameterSet,
    ) -> LensResult<GaussianMixtureProfile> {
        self.multi_gaussian_decomposition(
            params,
            None,
            &ComponentSelector::All,
            self.config.mge.n_components,
        )
    }
}
