// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Multi-Gaussian Expansion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! 1-D multi-Gaussian expansion (MGE) of a radial profile.
//!
//! Fixed, log-spaced widths between the innermost radius and half of the
//! outermost one; non-negative amplitudes from a relative-error NNLS fit.
//! Follows Cappellari (2002, MNRAS 333, 400) with the linear sub-problem only.

use crate::nnls::nnls;
use lens_types::error::{LensError, LensResult};
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Floor on the row weights, relative to the largest profile value.
const WEIGHT_FLOOR: f64 = 1e-12;

/// Keeps the outermost width finite when the last radius is tiny.
const OUTER_RADIUS_PAD: f64 = 1e-7;

/// Result of [`mge_1d`].
#[derive(Debug, Clone, PartialEq)]
pub struct MgeFit {
    pub amplitudes: Vec<f64>,
    pub sigmas: Vec<f64>,
    /// Weighted residual norm of the fit.
    pub normalization: f64,
}

impl MgeFit {
    pub fn evaluate(&self, r: f64) -> f64 {
        self.amplitudes
            .iter()
            .zip(self.sigmas.iter())
            .map(|(&a, &s)| gaussian(r, s, a))
            .sum()
    }
}

/// Circular 2-D Gaussian with integrated amplitude `amp`, evaluated at radius `r`.
pub fn gaussian(r: f64, sigma: f64, amp: f64) -> f64 {
    amp / (2.0 * PI * sigma * sigma) * (-(r / sigma).powi(2) / 2.0).exp()
}

/// Widths used for an `n`-component expansion over `[r_first, r_last]`.
pub fn mge_sigmas(r_first: f64, r_last: f64, n: usize) -> Vec<f64> {
    let lo = r_first.log10();
    let hi = ((r_last + OUTER_RADIUS_PAD) / 2.0).log10();
    let grid = Array1::logspace(10.0, lo, hi, n + 2);
    grid.iter().skip(1).take(n).copied().collect()
}

/// Expand `values(radii)` into `n_components` Gaussians.
///
/// When a fit fails the expansion is retried with one component fewer; the
/// last error is reported once no component count is left.
pub fn mge_1d(radii: &[f64], values: &[f64], n_components: usize) -> LensResult<MgeFit> {
    if n_components == 0 {
        return Err(LensError::InvalidArgument(
            "multi-Gaussian expansion needs at least one component".to_string(),
        ));
    }
    if radii.len() != values.len() {
        return Err(LensError::ShapeMismatch {
            what: "MGE radii vs values".to_string(),
            expected: radii.len(),
            got: values.len(),
        });
    }
    if radii.len() < 2 {
        return Err(LensError::InvalidArgument(
            "multi-Gaussian expansion needs at least two radii".to_string(),
        ));
    }
    if !radii.iter().all(|r| r.is_finite() && *r > 0.0) {
        return Err(LensError::InvalidArgument(
            "MGE radii must be finite and positive".to_string(),
        ));
    }
    if !radii.windows(2).all(|w| w[1] > w[0]) {
        return Err(LensError::InvalidArgument(
            "MGE radii must be strictly increasing".to_string(),
        ));
    }
    if !values.iter().all(|v| v.is_finite()) {
        return Err(LensError::Fit(
            "profile contains non-finite values".to_string(),
        ));
    }

    let mut last_err = None;
    for n in (1..=n_components).rev() {
        match fit_fixed_widths(radii, values, n) {
            Ok(fit) => {
                if n < n_components {
                    log::debug!("MGE fell back from {n_components} to {n} components");
                }
                return Ok(fit);
            }
            Err(e) => {
                log::trace!("MGE fit with {n} components failed: {e}");
                last_err = Some(e);
            }
        }
    }
    Err(LensError::Fit(match last_err {
        Some(e) => e.to_string(),
        None => "no component count left to try".to_string(),
    }))
}

fn fit_fixed_widths(radii: &[f64], values: &[f64], n: usize) -> LensResult<MgeFit> {
    let sigmas = mge_sigmas(radii[0], radii[radii.len() - 1], n);
    let m = radii.len();

    let v_max = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    if v_max == 0.0 {
        return Ok(MgeFit {
            amplitudes: vec![0.0; n],
            sigmas,
            normalization: 0.0,
        });
    }
    let floor = WEIGHT_FLOOR * v_max;
    let weights: Vec<f64> = values.iter().map(|v| 1.0 / v.abs().max(floor)).collect();

    let mut design = Array2::from_shape_fn((m, n), |(j, i)| {
        gaussian(radii[j], sigmas[i], 1.0) * weights[j]
    });
    let rhs = Array1::from_shape_fn(m, |j| values[j] * weights[j]);

    let col_scale: Vec<f64> = (0..n)
        .map(|i| design.column(i).iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect();
    if col_scale.iter().any(|&s| !(s.is_finite() && s > 0.0)) {
        return Err(LensError::Fit(format!(
            "degenerate Gaussian basis for {n} components"
        )));
    }
    for (i, &s) in col_scale.iter().enumerate() {
        design.column_mut(i).mapv_inplace(|v| v / s);
    }

    let solution = nnls(&design, &rhs)?;
    if !solution.converged {
        log::debug!(
            "NNLS hit its iteration limit after {} steps for {n} components",
            solution.iterations
        );
    }

    let amplitudes: Vec<f64> = solution
        .x
        .iter()
        .zip(col_scale.iter())
        .map(|(&x, &s)| x / s)
        .collect();
    if !amplitudes.iter().all(|a| a.is_finite()) {
        return Err(LensError::Fit(format!(
            "non-finite amplitudes for {n} components"
        )));
    }

    Ok(MgeFit {
        amplitudes,
        sigmas,
        normalization: solution.residual_norm,
    })
}
