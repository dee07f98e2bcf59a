// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Lens Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Profile analysis of lens models.
//!
//! [`ProfileAnalyzer`] derives summary quantities from the convergence and
//! deflection fields of any [`lens_models::evaluator::LensEvaluator`]:
//! effective Einstein radius, local lensing effects, logarithmic slope,
//! azimuthally averaged profiles, multi-Gaussian decompositions, aperture
//! mass fractions and convergence peaks.

pub mod analyzer;
pub mod aperture;
pub mod decomposition;
pub mod einstein;
pub mod peak;
pub mod radial;
pub mod slope;

pub use analyzer::ProfileAnalyzer;
pub use einstein::EinsteinRadiusOptions;
pub use peak::PeakOptions;
