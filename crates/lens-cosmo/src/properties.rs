// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Lens Properties
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Observables of a lens model at a given redshift configuration.

use crate::units::LensCosmo;
use lens_analysis::{EinsteinRadiusOptions, ProfileAnalyzer};
use lens_math::special::gamma as gamma_fn;
use lens_models::evaluator::LensEvaluator;
use lens_types::constants::{MPC_M, M_SUN};
use lens_types::error::{LensError, LensResult};
use lens_types::params::LensParameterSet;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Spherical Jeans solver for a power-law mass profile with a Hernquist-like
/// light distribution. Dispersions are returned in the solver's angular units;
/// [`LensProperties`] converts them to km/s.
pub trait VelocityDispersionSolver {
    /// Luminosity-weighted line-of-sight σ² in a slit aperture, seeing
    /// convolved.
    fn aperture_sigma2(
        &self,
        gamma: f64,
        rho0_r0_gamma: f64,
        r_eff: f64,
        aniso_param: f64,
        settings: &DispersionSettings,
    ) -> LensResult<f64>;

    /// Line-of-sight σ² of a single draw in the slit aperture, seeing
    /// convolved.
    fn single_draw_sigma2(
        &self,
        gamma: f64,
        rho0_r0_gamma: f64,
        r_eff: f64,
        aniso_param: f64,
        settings: &DispersionSettings,
    ) -> LensResult<f64>;

    /// Radial σ² at 3-D radius `r`.
    fn radial_sigma2(
        &self,
        r: f64,
        r_scale: f64,
        gamma: f64,
        rho0_r0_gamma: f64,
        r_ani: f64,
    ) -> LensResult<f64>;

    /// Whether the anisotropy parameter is a constant β rather than a radius
    /// in units of the effective radius.
    fn anisotropy_is_constant(&self) -> bool {
        false
    }
}

/// Observation and anisotropy settings of a velocity dispersion measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersionSettings {
    /// Half-light radius of the deflector light (arcsec).
    pub r_eff: f64,
    #[serde(default = "default_aniso_param")]
    pub aniso_param: f64,
    /// Slit length (arcsec).
    #[serde(default = "default_r_slit")]
    pub r_slit: f64,
    /// Slit width (arcsec).
    #[serde(default = "default_dr_slit")]
    pub dr_slit: f64,
    #[serde(default = "default_psf_fwhm")]
    pub psf_fwhm: f64,
    /// Monte Carlo draws used by the solver.
    #[serde(default = "default_num_evaluate")]
    pub num_evaluate: usize,
    /// Radius of the central dispersion estimate (arcsec).
    #[serde(default = "default_r_center")]
    pub r_center: f64,
}

fn default_aniso_param() -> f64 {
    1.0
}
fn default_r_slit() -> f64 {
    0.81
}
fn default_dr_slit() -> f64 {
    0.1
}
fn default_psf_fwhm() -> f64 {
    0.7
}
fn default_num_evaluate() -> usize {
    100
}
fn default_r_center() -> f64 {
    0.01
}

impl DispersionSettings {
    pub fn new(r_eff: f64) -> Self {
        DispersionSettings {
            r_eff,
            aniso_param: default_aniso_param(),
            r_slit: default_r_slit(),
            dr_slit: default_dr_slit(),
            psf_fwhm: default_psf_fwhm(),
            num_evaluate: default_num_evaluate(),
            r_center: default_r_center(),
        }
    }

    fn validate(&self) -> LensResult<()> {
        if !(self.r_eff.is_finite() && self.r_eff > 0.0) {
            return Err(LensError::InvalidArgument(format!(
                "effective radius must be positive, got {}",
                self.r_eff
            )));
        }
        Ok(())
    }
}

/// Anisotropy handed to the aperture solvers: a radius in units of the
/// effective radius unless the solver takes a constant β.
fn aperture_anisotropy<S: VelocityDispersionSolver + ?Sized>(
    solver: &S,
    settings: &DispersionSettings,
) -> f64 {
    if solver.anisotropy_is_constant() {
        settings.aniso_param
    } else {
        settings.aniso_param * settings.r_eff
    }
}

/// Lens observables: time delays, density normalisation, velocity
/// dispersion and distance relations.
pub struct LensProperties<'a, M: LensEvaluator + ?Sized> {
    cosmo: LensCosmo,
    analyzer: ProfileAnalyzer<'a, M>,
}

impl<'a, M: LensEvaluator + ?Sized> LensProperties<'a, M> {
    pub fn new(cosmo: LensCosmo, analyzer: ProfileAnalyzer<'a, M>) -> Self {
        LensProperties { cosmo, analyzer }
    }

    pub fn cosmo(&self) -> &LensCosmo {
        &self.cosmo
    }

    pub fn analyzer(&self) -> &ProfileAnalyzer<'a, M> {
        &self.analyzer
    }

    /// Time delays (days) of images with the given Fermat potentials (arcsec²).
    pub fn time_delays(&self, fermat_potentials: &[f64], kappa_ext: f64) -> Vec<f64> {
        fermat_potentials
            .iter()
            .map(|&phi| self.cosmo.time_delay_units(phi, kappa_ext))
            .collect()
    }

    /// Density normalisation ρ₀ r₀^γ (kg/m³ in arcsec-scaled radius) of a
    /// power-law profile with slope `gamma`, normalised at its effective
    /// Einstein radius (Suyu et al. 2010, eq. 14).
    pub fn rho0_r0_gamma(
        &self,
        params: &LensParameterSet,
        gamma: f64,
        kappa_ext: f64,
    ) -> LensResult<f64> {
        if !(gamma > 1.0 && gamma < 3.0) {
            return Err(LensError::InvalidArgument(format!(
                "power-law slope must lie in (1, 3), got {gamma}"
            )));
        }
        let theta_e = self
            .analyzer
            .effective_einstein_radius(params, &EinsteinRadiusOptions::default())?
            .radius;
        if theta_e <= 0.0 {
            return Err(LensError::DegenerateRadius { radius: theta_e });
        }

        let shape = gamma_fn(gamma / 2.0) / (PI.sqrt() * gamma_fn((gamma - 3.0) / 2.0));
        let rho = (kappa_ext - 1.0) * shape * theta_e.powf(gamma)
            / self.cosmo.arcsec2phys_lens(theta_e)
            * self.cosmo.epsilon_crit()
            * M_SUN
            / MPC_M.powi(3);
        log::debug!("ρ₀r₀^γ = {rho:e} for γ = {gamma}, θ_E = {theta_e}, κ_ext = {kappa_ext}");
        Ok(rho)
    }

    /// Aperture velocity dispersion (km/s) of a power-law lens.
    pub fn velocity_dispersion<S: VelocityDispersionSolver + ?Sized>(
        &self,
        solver: &S,
        params: &LensParameterSet,
        gamma: f64,
        kappa_ext: f64,
        settings: &DispersionSettings,
    ) -> LensResult<f64> {
        settings.validate()?;
        let rho0_r0_gamma = self.rho0_r0_gamma(params, gamma, kappa_ext)?;
        let aniso_param = aperture_anisotropy(solver, settings);
        let sigma2 =
            solver.aperture_sigma2(gamma, rho0_r0_gamma, settings.r_eff, aniso_param, settings)?;
        self.to_km_per_s(sigma2)
    }

    /// σ² ((km/s)²) of one solver draw in the slit aperture.
    pub fn velocity_dispersion_one<S: VelocityDispersionSolver + ?Sized>(
        &self,
        solver: &S,
        params: &LensParameterSet,
        gamma: f64,
        kappa_ext: f64,
        settings: &DispersionSettings,
    ) -> LensResult<f64> {
        settings.validate()?;
        let rho0_r0_gamma = self.rho0_r0_gamma(params, gamma, kappa_ext)?;
        let aniso_param = aperture_anisotropy(solver, settings);
        let sigma2 = solver.single_draw_sigma2(
            gamma,
            rho0_r0_gamma,
            settings.r_eff,
            aniso_param,
            settings,
        )?;
        Ok(self.to_km_per_s(sigma2)?.powi(2))
    }

    /// Central radial velocity dispersion (km/s) at `settings.r_center`.
    pub fn central_velocity_dispersion<S: VelocityDispersionSolver + ?Sized>(
        &self,
        solver: &S,
        params: &LensParameterSet,
        gamma: f64,
        kappa_ext: f64,
        settings: &DispersionSettings,
    ) -> LensResult<f64> {
        settings.validate()?;
        let rho0_r0_gamma = self.rho0_r0_gamma(params, gamma, kappa_ext)?;
        let r_ani = settings.aniso_param * settings.r_eff;
        // Hernquist scale radius of a de Vaucouleurs-like light profile.
        let r_scale = 0.551 * settings.r_eff;
        let sigma2 =
            solver.radial_sigma2(settings.r_center, r_scale, gamma, rho0_r0_gamma, r_ani)?;
        self.to_km_per_s(sigma2)
    }

    fn to_km_per_s(&self, sigma2: f64) -> LensResult<f64> {
        if !(sigma2.is_finite() && sigma2 >= 0.0) {
            return Err(LensError::Model(format!(
                "Jeans solver returned an invalid σ² = {sigma2}"
            )));
        }
        Ok(sigma2.sqrt() * self.cosmo.arcsec2phys_lens(1.0) * MPC_M / 1000.0)
    }

    /// Angular diameter distances implied by a measured velocity dispersion
    /// and a time-delay distance. Returns `(D_d, D_s / D_ds)`.
    pub fn angular_diameter_relations(
        &self,
        sigma_v_model: f64,
        sigma_v: f64,
        kappa_ext: f64,
        d_dt_model: f64,
    ) -> LensResult<(f64, f64)> {
        if sigma_v_model == 0.0 || kappa_ext >= 1.0 {
            return Err(LensError::InvalidArgument(format!(
                "need a non-zero model dispersion and κ_ext < 1, got σ = {sigma_v_model}, κ_ext = {kappa_ext}"
            )));
        }
        let ds_dds = sigma_v * sigma_v
            / (1.0 - kappa_ext)
            / (sigma_v_model * sigma_v_model * self.cosmo.d_ds() / self.cosmo.d_s());
        let d_d = d_dt_model / (1.0 + self.cosmo.z_lens) / ds_dds / (1.0 - kappa_ext);
        Ok((d_d, ds_dds))
    }
}
