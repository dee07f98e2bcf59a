// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Einstein Radius
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Effective Einstein radius: the radius within which the mean convergence
//! equals one.
//!
//! The convergence is sampled once on a square grid around the lens center.
//! Candidate radii are then scanned outward from zero and the first radius
//! whose enclosed mean convergence falls below one is returned. The scan
//! resolution is half the grid extent over `2 · grid_num` radii, and that
//! step is reported as the precision of the estimate.

use crate::analyzer::ProfileAnalyzer;
use crate::peak::grid_maxima;
use lens_math::mask::outside_mask;
use lens_math::sampling::linear_radii;
use lens_models::evaluator::LensEvaluator;
use lens_types::constants::CRITICAL_MEAN_CONVERGENCE;
use lens_types::error::{LensError, LensResult};
use lens_types::grid::CoordinateGrid;
use lens_types::params::{ComponentSelector, LensParameterSet};
use lens_types::profile::EinsteinRadius;

/// Radii at or below this are unusable as a scale for slope or MGE sampling.
pub const MIN_EINSTEIN_RADIUS: f64 = 1e-10;

/// Options of the Einstein radius scan. Unset grid values come from the
/// analyzer configuration.
#[derive(Debug, Clone, Default)]
pub struct EinsteinRadiusOptions {
    /// Search center; defaults to the primary deflector's center.
    pub center: Option<(f64, f64)>,
    pub selector: ComponentSelector,
    pub grid_num: Option<usize>,
    pub grid_spacing: Option<f64>,
}

impl EinsteinRadiusOptions {
    pub fn centered_at(mut self, center_x: f64, center_y: f64) -> Self {
        self.center = Some((center_x, center_y));
        self
    }

    pub fn with_selector(mut self, selector: ComponentSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_grid(mut self, grid_num: usize, grid_spacing: f64) -> Self {
        self.grid_num = Some(grid_num);
        self.grid_spacing = Some(grid_spacing);
        self
    }
}

impl<M: LensEvaluator + ?Sized> ProfileAnalyzer<'_, M> {
    /// Radius of unit mean enclosed convergence.
    ///
    /// Fails with [`LensError::EinsteinRadiusNotFound`] when the mean never
    /// drops below one inside the grid.
    pub fn effective_einstein_radius(
        &self,
        params: &LensParameterSet,
        options: &EinsteinRadiusOptions,
    ) -> LensResult<EinsteinRadius> {
        let grid_num = options.grid_num.unwrap_or(self.config.einstein.grid_num);
        let grid_spacing = options
            .grid_spacing
            .unwrap_or(self.config.einstein.grid_spacing);
        let (mut center_x, mut center_y) = params.resolve_center(options.center)?;

        let grid = CoordinateGrid::centered_on(grid_num, grid_spacing, center_x, center_y)?;
        let kappa = self
            .model
            .convergence(&grid.x, &grid.y, params, &options.selector)?;

        // Pixelated primaries carry no analytic center.
        if self.model.primary_is_interpolated() {
            if let Some(&k) = grid_maxima(&kappa).0.first() {
                (center_x, center_y) = grid.point(k);
                log::trace!("interpolated primary, recentred on κ max at ({center_x}, {center_y})");
            }
        }

        let r_max = grid_num as f64 * grid_spacing / 2.0;
        let (radii, step) = linear_radii(r_max, 2 * grid_num);
        let mut previous: Option<f64> = None;
        for &r in radii.iter() {
            let enclosed = outside_mask(&grid, center_x, center_y, r).complement();
            let Some(mean) = enclosed.mean_of(&kappa)? else {
                continue;
            };
            if previous.is_some_and(|p| mean > p) {
                log::trace!("mean convergence rises from {previous:?} to {mean} at r = {r}");
            }
            previous = Some(mean);

            if mean < CRITICAL_MEAN_CONVERGENCE {
                log::debug!(
                    "Einstein radius {r} (±{step}) around ({center_x}, {center_y}), {} points enclosed",
                    enclosed.count()
                );
                return Ok(EinsteinRadius {
                    radius: r,
                    precision: step,
                });
            }
        }

        log::debug!("no Einstein radius within {r_max} of ({center_x}, {center_y}) for {params}");
        Err(LensError::EinsteinRadiusNotFound {
            params: params.to_string(),
            max_radius: r_max,
        })
    }

    /// Einstein radius with default options, checked to be usable as a scale.
    pub(crate) fn einstein_scale(&self, params: &LensParameterSet) -> LensResult<f64> {
        let theta_e = self
            .effective_einstein_radius(params, &EinsteinRadiusOptions::default())?
            .radius;
        if theta_e <= MIN_EINSTEIN_RADIUS {
            return Err(LensError::DegenerateRadius { radius: theta_e });
        }
        Ok(theta_e)
    }
}
