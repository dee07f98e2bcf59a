// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Sampling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sample positions on circles and logarithmic radius arrays.

use lens_types::error::{LensError, LensResult};
use ndarray::Array1;
use std::f64::consts::PI;

/// `num_points` equally spaced positions on a circle of `radius` around the
/// origin, starting on the +x axis. The end point (2π) is excluded so no
/// azimuth is counted twice.
pub fn points_on_circle(radius: f64, num_points: usize) -> (Array1<f64>, Array1<f64>) {
    let step = 2.0 * PI / num_points.max(1) as f64;
    let x = Array1::from_shape_fn(num_points, |i| radius * (step * i as f64).cos());
    let y = Array1::from_shape_fn(num_points, |i| radius * (step * i as f64).sin());
    (x, y)
}

/// Same as [`points_on_circle`] but translated to `(center_x, center_y)`.
pub fn points_on_circle_around(
    radius: f64,
    num_points: usize,
    center_x: f64,
    center_y: f64,
) -> (Array1<f64>, Array1<f64>) {
    let (x, y) = points_on_circle(radius, num_points);
    (x + center_x, y + center_y)
}

/// `n` radii from 0 to `r_max`, both ends included. Returns the radii and the
/// step between them.
pub fn linear_radii(r_max: f64, n: usize) -> (Array1<f64>, f64) {
    let radii = Array1::linspace(0.0, r_max, n);
    let step = if n > 1 { radii[1] - radii[0] } else { 0.0 };
    (radii, step)
}

/// `n` radii logarithmically spaced between `10^log_min · scale` and
/// `10^log_max · scale`.
pub fn log_radii(log_min: f64, log_max: f64, n: usize, scale: f64) -> LensResult<Array1<f64>> {
    if n < 2 || !(log_min < log_max) {
        return Err(LensError::InvalidArgument(format!(
            "log radius range needs n >= 2 and log_min < log_max, got n={n}, [{log_min}, {log_max}]"
        )));
    }
    if !(scale.is_finite() && scale > 0.0) {
        return Err(LensError::InvalidArgument(format!(
            "log radius scale must be finite and positive, got {scale}"
        )));
    }
    Ok(Array1::logspace(10.0, log_min, log_max, n) * scale)
}
