// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    #[error(
        "No Einstein radius found within r <= {max_radius}: mean convergence never dropped below 1 for {params}"
    )]
    EinsteinRadiusNotFound { params: String, max_radius: f64 },

    #[error("Einstein radius {radius} is too close to zero for a finite-difference estimate")]
    DegenerateRadius { radius: f64 },

    #[error("Aperture of radius {radius} around ({center_x}, {center_y}) selects no grid points")]
    DegenerateMask {
        center_x: f64,
        center_y: f64,
        radius: f64,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing lens parameter '{name}'")]
    MissingParameter { name: String },

    #[error("Component index {index} out of range for {len} lens components")]
    ComponentOutOfRange { index: usize, len: usize },

    #[error("Shape mismatch: {what} (expected {expected}, got {got})")]
    ShapeMismatch {
        what: String,
        expected: usize,
        got: usize,
    },

    #[error("Lens model evaluation failed: {0}")]
    Model(String),

    #[error("Linear algebra error: {0}")]
    LinAlg(String),

    #[error("Multi-Gaussian fit failed: {0}")]
    Fit(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LensError {
    /// True for the "no Einstein radius" outcome, including when it was
    /// propagated by a dependent operation.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LensError::EinsteinRadiusNotFound { .. })
    }
}

pub type LensResult<T> = Result<T, LensError>;
