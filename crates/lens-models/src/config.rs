// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Model Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::evaluator::LensModel;
use crate::kind::ProfileKind;
use crate::profiles::interpolated::InterpolatedPotential;
use crate::profiles::LensProfile;
use lens_math::interp::PixelAxes;
use lens_types::error::{LensError, LensResult};
use lens_types::params::{ComponentParams, LensParameterSet};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Lens model description: profile families and their parameters, in
/// component order. Component 0 is the primary deflector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensModelConfig {
    pub components: Vec<ComponentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub model: ProfileKind,
    #[serde(default)]
    pub params: ComponentParams,
    /// Potential map, required by the pixelated families.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential: Option<PotentialMap>,
}

/// Lensing potential sampled on a regular pixel grid, row-major
/// (`values[iy * nx + ix]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialMap {
    pub nx: usize,
    pub ny: usize,
    pub x_min: f64,
    pub y_min: f64,
    pub dx: f64,
    pub dy: f64,
    pub values: Vec<f64>,
}

impl PotentialMap {
    fn to_profile(&self, kind: ProfileKind) -> LensResult<InterpolatedPotential> {
        let axes = PixelAxes::new(self.nx, self.ny, self.x_min, self.y_min, self.dx, self.dy)?;
        let psi = Array2::from_shape_vec((self.ny, self.nx), self.values.clone()).map_err(|_| {
            LensError::ShapeMismatch {
                what: "potential map values".to_string(),
                expected: self.nx * self.ny,
                got: self.values.len(),
            }
        })?;
        InterpolatedPotential::from_potential(kind, axes, &psi)
    }
}

impl LensModelConfig {
    pub fn from_file(path: &str) -> LensResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> LensResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.components.is_empty() {
            return Err(LensError::ConfigError(
                "lens model needs at least one component".to_string(),
            ));
        }
        Ok(config)
    }

    /// Build the evaluator and the matching parameter set.
    pub fn build(&self) -> LensResult<(LensModel, LensParameterSet)> {
        let mut profiles: Vec<Box<dyn LensProfile>> = Vec::with_capacity(self.components.len());
        for (i, component) in self.components.iter().enumerate() {
            let profile: Box<dyn LensProfile> = match (component.model.is_interpolated(), &component.potential) {
                (true, Some(map)) => Box::new(map.to_profile(component.model)?),
                (true, None) => {
                    return Err(LensError::ConfigError(format!(
                        "component {i} ({}) needs a potential map",
                        component.model
                    )))
                }
                (false, _) => component.model.analytic_profile()?,
            };
            profiles.push(profile);
        }
        let params = self
            .components
            .iter()
            .map(|c| c.params.clone())
            .collect::<Vec<_>>();
        Ok((LensModel::from_profiles(profiles), LensParameterSet::new(params)))
    }
}
