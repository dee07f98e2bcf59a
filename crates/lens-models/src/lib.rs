// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Lens Models
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lens model evaluator.
//!
//! Parametric profile families behind the [`evaluator::LensEvaluator`]
//! capability: deflection, convergence and Hessian over coordinate arrays.

pub mod config;
pub mod evaluator;
pub mod kind;
pub mod profiles;
