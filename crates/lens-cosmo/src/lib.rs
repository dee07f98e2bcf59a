// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Lens Cosmology
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical observables of lens models.
//!
//! Distances in a flat ΛCDM background, conversion of angular lensing
//! quantities to physical units, time delays, power-law density
//! normalisation and line-of-sight velocity dispersion through an external
//! Jeans solver.

pub mod background;
pub mod properties;
pub mod units;

pub use background::FlatLambdaCdm;
pub use properties::{DispersionSettings, LensProperties, VelocityDispersionSolver};
pub use units::LensCosmo;
