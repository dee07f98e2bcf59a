// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Profile Results
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Result records returned by the profile analysis operations.

use std::f64::consts::PI;

/// Azimuthally averaged values at a list of radii.
///
/// `radii[i]` pairs with `values[i]`; the order is the order the radii were
/// requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialProfile {
    pub radii: Vec<f64>,
    pub values: Vec<f64>,
}

impl RadialProfile {
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// True when the radii are non-negative and strictly increasing.
    pub fn is_monotonic(&self) -> bool {
        self.radii.first().map_or(true, |&r| r >= 0.0)
            && self.radii.windows(2).all(|w| w[1] > w[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.radii.iter().copied().zip(self.values.iter().copied())
    }
}

/// Sum of concentric, circular 2-D Gaussians approximating a radial profile.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianMixtureProfile {
    /// Integrated amplitude of each component.
    pub amplitudes: Vec<f64>,
    pub sigmas: Vec<f64>,
    /// Residual norm reported by the fit.
    pub normalization: f64,
    pub center: (f64, f64),
}

impl GaussianMixtureProfile {
    pub fn n_components(&self) -> usize {
        self.amplitudes.len()
    }

    /// Mixture value at radius `r` from the center:
    /// Σ aᵢ / (2π σᵢ²) · exp(-r² / 2σᵢ²)
    pub fn evaluate(&self, r: f64) -> f64 {
        self.amplitudes
            .iter()
            .zip(self.sigmas.iter())
            .map(|(&a, &s)| a / (2.0 * PI * s * s) * (-(r * r) / (2.0 * s * s)).exp())
            .sum()
    }

    /// Total integrated amplitude (projected mass in convergence units).
    pub fn total_amplitude(&self) -> f64 {
        self.amplitudes.iter().sum()
    }
}

/// Effective Einstein radius together with the scan step that bounds its
/// discretization error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EinsteinRadius {
    pub radius: f64,
    pub precision: f64,
}

/// Deflection, convergence and shear at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalLensingEffect {
    pub alpha_x: f64,
    pub alpha_y: f64,
    pub kappa_ext: f64,
    pub shear1: f64,
    pub shear2: f64,
}

impl LocalLensingEffect {
    pub fn shear_magnitude(&self) -> f64 {
        self.shear1.hypot(self.shear2)
    }
}

/// Grid position(s) of maximum convergence. Every tied maximum is listed in
/// grid order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergencePeak {
    pub positions: Vec<(f64, f64)>,
    pub value: f64,
}

impl ConvergencePeak {
    /// First maximum in grid order.
    pub fn first(&self) -> Option<(f64, f64)> {
        self.positions.first().copied()
    }

    /// Mean position over all tied maxima.
    pub fn mean_position(&self) -> Option<(f64, f64)> {
        if self.positions.is_empty() {
            return None;
        }
        let n = self.positions.len() as f64;
        let (sx, sy) = self
            .positions
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        Some((sx / n, sy / n))
    }

    pub fn is_unique(&self) -> bool {
        self.positions.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixture_single_gaussian_peak() {
        let mix = GaussianMixtureProfile {
            amplitudes: vec![2.0 * PI],
            sigmas: vec![1.0],
            normalization: 0.0,
            center: (0.0, 0.0),
        };
        assert!((mix.evaluate(0.0) - 1.0).abs() < 1e-12);
        assert!((mix.evaluate(1.0) - (-0.5f64).exp()).abs() < 1e-12);
        assert_eq!(mix.n_components(), 1);
    }

    #[test]
    fn test_radial_profile_monotonic_flag() {
        let sorted = RadialProfile {
            radii: vec![0.0, 0.5, 1.0],
            values: vec![3.0, 2.0, 1.0],
        };
        assert!(sorted.is_monotonic());
        let shuffled = RadialProfile {
            radii: vec![1.0, 0.5],
            values: vec![1.0, 2.0],
        };
        assert!(!shuffled.is_monotonic());
    }

    #[test]
    fn test_peak_helpers() {
        let peak = ConvergencePeak {
            positions: vec![(0.0, 1.0), (2.0, 3.0)],
            value: 4.0,
        };
        assert_eq!(peak.first(), Some((0.0, 1.0)));
        assert_eq!(peak.mean_position(), Some((1.0, 2.0)));
        assert!(!peak.is_unique());
    }
}
