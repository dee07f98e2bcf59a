// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Linear Algebra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense least squares via Householder QR.
//!
//! Columns are scaled to unit norm before factorization; the Gaussian design
//! matrices of the multi-Gaussian expansion span many orders of magnitude.

use lens_types::error::{LensError, LensResult};
use ndarray::{Array1, Array2};

/// Relative pivot threshold below which a column counts as dependent.
const RANK_TOLERANCE: f64 = 1e-12;

/// Solve `min ||A x - b||₂` for an `m × n` matrix with `m >= n`.
///
/// Rank-deficient directions get a zero coefficient instead of an error.
pub fn lstsq(a: &Array2<f64>, b: &Array1<f64>) -> LensResult<Array1<f64>> {
    let (m, n) = a.dim();
    if b.len() != m {
        return Err(LensError::ShapeMismatch {
            what: "least-squares right-hand side".to_string(),
            expected: m,
            got: b.len(),
        });
    }
    if m < n {
        return Err(LensError::LinAlg(format!(
            "least squares needs at least as many rows as columns, got {m}x{n}"
        )));
    }
    if !a.iter().all(|v| v.is_finite()) || !b.iter().all(|v| v.is_finite()) {
        return Err(LensError::LinAlg(
            "least squares received non-finite input".to_string(),
        ));
    }

    // Column equilibration
    let scales: Vec<f64> = (0..n)
        .map(|j| a.column(j).iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect();
    let mut r = a.clone();
    for (j, &s) in scales.iter().enumerate() {
        if s > 0.0 {
            r.column_mut(j).mapv_inplace(|v| v / s);
        }
    }
    let mut qtb = b.clone();

    // Householder reflections
    for k in 0..n {
        let norm = (k..m).map(|i| r[[i, k]] * r[[i, k]]).sum::<f64>().sqrt();
        if norm == 0.0 {
            continue;
        }
        let alpha = if r[[k, k]] > 0.0 { -norm } else { norm };
        let mut v: Vec<f64> = (k..m).map(|i| r[[i, k]]).collect();
        v[0] -= alpha;
        let v_norm2: f64 = v.iter().map(|x| x * x).sum();
        if v_norm2 == 0.0 {
            continue;
        }

        for j in k..n {
            let dot: f64 = v.iter().enumerate().map(|(t, vi)| vi * r[[k + t, j]]).sum();
            let f = 2.0 * dot / v_norm2;
            for (t, vi) in v.iter().enumerate() {
                r[[k + t, j]] -= f * vi;
            }
        }
        let dot: f64 = v.iter().enumerate().map(|(t, vi)| vi * qtb[k + t]).sum();
        let f = 2.0 * dot / v_norm2;
        for (t, vi) in v.iter().enumerate() {
            qtb[k + t] -= f * vi;
        }
    }

    // Back substitution on R
    let max_diag = (0..n).map(|k| r[[k, k]].abs()).fold(0.0, f64::max);
    let mut x = Array1::zeros(n);
    for k in (0..n).rev() {
        let diag = r[[k, k]];
        if diag.abs() <= RANK_TOLERANCE * max_diag || diag == 0.0 {
            x[k] = 0.0;
            continue;
        }
        let mut acc = qtb[k];
        for j in (k + 1)..n {
            acc -= r[[k, j]] * x[j];
        }
        x[k] = acc / diag;
    }

    for (j, &s) in scales.iter().enumerate() {
        x[j] = if s > 0.0 { x[j] / s } else { 0.0 };
    }

    if !x.iter().all(|v| v.is_finite()) {
        return Err(LensError::LinAlg(
            "least-squares solution contains non-finite values".to_string(),
        ));
    }
    Ok(x)
}

/// `||A x - b||₂`
pub fn residual_norm(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    (a.dot(x) - b).iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_lstsq_square_exact() {
        let a = array![[2.0, 1.0], [1.0, 3.0]];
        let b = array![3.0, 5.0];
        let x = lstsq(&a, &b).unwrap();
        assert!((x[0] - 0.8).abs() < 1e-12, "x0 = {}", x[0]);
        assert!((x[1] - 1.4).abs() < 1e-12, "x1 = {}", x[1]);
    }

    #[test]
    fn test_lstsq_line_fit() {
        // y = 1 + 2t sampled exactly
        let t: Vec<f64> = (0..10).map(|i| i as f64 * 0.3).collect();
        let a = Array2::from_shape_fn((10, 2), |(i, j)| if j == 0 { 1.0 } else { t[i] });
        let b = Array1::from_shape_fn(10, |i| 1.0 + 2.0 * t[i]);
        let x = lstsq(&a, &b).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-10);
        assert!((x[1] - 2.0).abs() < 1e-10);
        assert!(residual_norm(&a, &x, &b) < 1e-10);
    }

    #[test]
    fn test_lstsq_badly_scaled_columns() {
        let a = array![[1e8, 1e-6], [2e8, -1e-6], [0.0, 3e-6]];
        let truth = array![1e-8, 2e6];
        let b = a.dot(&truth);
        let x = lstsq(&a, &b).unwrap();
        assert!(((x[0] - truth[0]) / truth[0]).abs() < 1e-9);
        assert!(((x[1] - truth[1]) / truth[1]).abs() < 1e-9);
    }

    #[test]
    fn test_lstsq_zero_column() {
        let a = array![[1.0, 0.0], [1.0, 0.0], [1.0, 0.0]];
        let b = array![2.0, 2.0, 2.0];
        let x = lstsq(&a, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert_eq!(x[1], 0.0);
    }

    #[test]
    fn test_lstsq_rejects_bad_shapes() {
        let a = Array2::zeros((2, 3));
        assert!(lstsq(&a, &Array1::zeros(2)).is_err());
        let a = Array2::zeros((3, 2));
        assert!(lstsq(&a, &Array1::zeros(2)).is_err());
    }
}
