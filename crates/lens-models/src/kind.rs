// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Profile Kind
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::profiles::gaussian::GaussianKappa;
use crate::profiles::point_mass::SoftPointMass;
use crate::profiles::sheet::ConvergenceSheet;
use crate::profiles::shear::ExternalShear;
use crate::profiles::sis::Sis;
use crate::profiles::spp::Spp;
use crate::profiles::LensProfile;
use lens_types::error::{LensError, LensResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lens profile family. The string names are those used in model
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileKind {
    /// Singular isothermal sphere
    Sis,
    /// Spherical power law
    Spp,
    /// Point mass with a softening core
    SoftPointMass,
    /// Uniform convergence sheet
    Convergence,
    /// External shear
    Shear,
    /// Circular Gaussian convergence
    GaussianKappa,
    /// Pixelated lensing potential
    Interpol,
    /// Pixelated lensing potential with an overall scale factor
    InterpolScaled,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 8] = [
        ProfileKind::Sis,
        ProfileKind::Spp,
        ProfileKind::SoftPointMass,
        ProfileKind::Convergence,
        ProfileKind::Shear,
        ProfileKind::GaussianKappa,
        ProfileKind::Interpol,
        ProfileKind::InterpolScaled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Sis => "SIS",
            ProfileKind::Spp => "SPP",
            ProfileKind::SoftPointMass => "SOFT_POINT_MASS",
            ProfileKind::Convergence => "CONVERGENCE",
            ProfileKind::Shear => "SHEAR",
            ProfileKind::GaussianKappa => "GAUSSIAN_KAPPA",
            ProfileKind::Interpol => "INTERPOL",
            ProfileKind::InterpolScaled => "INTERPOL_SCALED",
        }
    }

    /// Pixelated kinds have no analytic center.
    pub fn is_interpolated(&self) -> bool {
        matches!(self, ProfileKind::Interpol | ProfileKind::InterpolScaled)
    }

    /// Instantiate an analytic profile. Interpolated kinds need a pixel map and
    /// are built with `InterpolatedPotential` instead.
    pub fn analytic_profile(&self) -> LensResult<Box<dyn LensProfile>> {
        Ok(match self {
            ProfileKind::Sis => Box::new(Sis),
            ProfileKind::Spp => Box::new(Spp),
            ProfileKind::SoftPointMass => Box::new(SoftPointMass),
            ProfileKind::Convergence => Box::new(ConvergenceSheet),
            ProfileKind::Shear => Box::new(ExternalShear),
            ProfileKind::GaussianKappa => Box::new(GaussianKappa),
            ProfileKind::Interpol | ProfileKind::InterpolScaled => {
                return Err(LensError::InvalidArgument(format!(
                    "{self} profiles need a pixel map"
                )))
            }
        })
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| LensError::InvalidArgument(format!("unknown lens profile '{s}'")))
    }
}
