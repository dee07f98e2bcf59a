// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — NNLS
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Non-negative least squares (Lawson & Hanson, "Solving Least Squares
//! Problems", 1974, ch. 23).

use crate::linalg::{lstsq, residual_norm};
use lens_types::error::{LensError, LensResult};
use ndarray::{Array1, Array2, Axis};

#[derive(Debug, Clone)]
pub struct NnlsSolution {
    pub x: Array1<f64>,
    pub residual_norm: f64,
    pub iterations: usize,
    /// False when the iteration limit was hit; `x` is then feasible but not
    /// necessarily optimal.
    pub converged: bool,
}

/// Solve `min ||A x - b||₂` subject to `x >= 0`.
pub fn nnls(a: &Array2<f64>, b: &Array1<f64>) -> LensResult<NnlsSolution> {
    let (m, n) = a.dim();
    if b.len() != m {
        return Err(LensError::ShapeMismatch {
            what: "NNLS right-hand side".to_string(),
            expected: m,
            got: b.len(),
        });
    }
    if n == 0 {
        return Err(LensError::LinAlg("NNLS needs at least one column".to_string()));
    }

    let max_iter = 3 * n.max(10);
    let norm1 = (0..n)
        .map(|j| a.column(j).iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max);
    let tol = 10.0 * f64::EPSILON * norm1 * m.max(n) as f64;

    let mut x = Array1::<f64>::zeros(n);
    let mut passive = vec![false; n];
    let mut iterations = 0;
    let mut converged = true;

    let mut w = a.t().dot(&(b - &a.dot(&x)));

    'outer: loop {
        let candidate = (0..n)
            .filter(|&j| !passive[j])
            .max_by(|&i, &j| w[i].partial_cmp(&w[j]).unwrap_or(std::cmp::Ordering::Equal));
        let Some(j_max) = candidate else { break };
        if w[j_max] <= tol {
            break;
        }
        passive[j_max] = true;

        loop {
            iterations += 1;
            if iterations > max_iter {
                converged = false;
                break 'outer;
            }

            let idx: Vec<usize> = (0..n).filter(|&j| passive[j]).collect();
            let sub = a.select(Axis(1), &idx);
            let s_p = lstsq(&sub, b)?;
            let mut s = Array1::<f64>::zeros(n);
            for (k, &j) in idx.iter().enumerate() {
                s[j] = s_p[k];
            }

            if idx.iter().all(|&j| s[j] > 0.0) {
                x = s;
                break;
            }

            // Step from x toward s until the first passive variable hits zero.
            let alpha = idx
                .iter()
                .filter(|&&j| s[j] <= 0.0 && x[j] - s[j] > 0.0)
                .map(|&j| x[j] / (x[j] - s[j]))
                .fold(f64::INFINITY, f64::min);
            let alpha = if alpha.is_finite() { alpha } else { 0.0 };
            x = &x + &((&s - &x) * alpha);

            let x_scale = x.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
            for &j in &idx {
                if x[j] <= f64::EPSILON * x_scale {
                    x[j] = 0.0;
                    passive[j] = false;
                }
            }
            if !passive.iter().any(|&p| p) {
                break;
            }
        }

        w = a.t().dot(&(b - &a.dot(&x)));
    }

    if !x.iter().all(|v| v.is_finite()) {
        return Err(LensError::LinAlg(
            "NNLS solution contains non-finite values".to_string(),
        ));
    }

    Ok(NnlsSolution {
        residual_norm: residual_norm(a, &x, b),
        x,
        iterations,
        converged,
    })
}
