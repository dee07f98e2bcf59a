// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{LensError, LensResult};
use serde::{Deserialize, Serialize};

/// Numerical settings of every profile analysis operation.
///
/// Every field has a default, so a JSON file only needs to list the values it
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub einstein: EinsteinConfig,
    #[serde(default)]
    pub slope: SlopeConfig,
    #[serde(default)]
    pub radial: RadialConfig,
    #[serde(default)]
    pub mge: MgeConfig,
    #[serde(default)]
    pub mass_fraction: MassFractionConfig,
    #[serde(default)]
    pub peak: PeakConfig,
}

/// Einstein radius scan grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EinsteinConfig {
    /// Pixels per side (default: 200)
    #[serde(default = "default_einstein_grid_num")]
    pub grid_num: usize,
    /// Pixel size in angular units (default: 0.05)
    #[serde(default = "default_einstein_grid_spacing")]
    pub grid_spacing: f64,
}

/// Finite-difference slope estimate around the Einstein radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeConfig {
    /// Azimuthal samples per circle (default: 10)
    #[serde(default = "default_slope_num_points")]
    pub num_points: usize,
    /// Radial offset of the second circle (default: 0.01)
    #[serde(default = "default_slope_delta_r")]
    pub delta_r: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialConfig {
    /// Azimuthal samples averaged per radius (default: 20)
    #[serde(default = "default_azimuthal_samples")]
    pub azimuthal_samples: usize,
}

/// Multi-Gaussian decomposition sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MgeConfig {
    /// Gaussian components (default: 20)
    #[serde(default = "default_mge_components")]
    pub n_components: usize,
    /// log10 of the innermost radius in units of θ_E (default: -4)
    #[serde(default = "default_mge_log_r_min")]
    pub log_r_min: f64,
    /// log10 of the outermost radius in units of θ_E (default: 2)
    #[serde(default = "default_mge_log_r_max")]
    pub log_r_max: f64,
    /// Radii sampled between the two (default: 200)
    #[serde(default = "default_mge_num_radii")]
    pub num_radii: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MassFractionConfig {
    /// Pixels across the aperture diameter (default: 100)
    #[serde(default = "default_mass_fraction_resolution")]
    pub grid_resolution: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakConfig {
    /// Pixels per side (default: 200)
    #[serde(default = "default_peak_grid_num")]
    pub grid_num: usize,
    /// Pixel size in angular units (default: 0.01)
    #[serde(default = "default_peak_grid_spacing")]
    pub grid_spacing: f64,
}

fn default_einstein_grid_num() -> usize {
    200
}
fn default_einstein_grid_spacing() -> f64 {
    0.05
}
fn default_slope_num_points() -> usize {
    10
}
fn default_slope_delta_r() -> f64 {
    0.01
}
fn default_azimuthal_samples() -> usize {
    20
}
fn default_mge_components() -> usize {
    20
}
fn default_mge_log_r_min() -> f64 {
    -4.0
}
fn default_mge_log_r_max() -> f64 {
    2.0
}
fn default_mge_num_radii() -> usize {
    200
}
fn default_mass_fraction_resolution() -> usize {
    100
}
fn default_peak_grid_num() -> usize {
    200
}
fn default_peak_grid_spacing() -> f64 {
    0.01
}

impl Default for EinsteinConfig {
    fn default() -> Self {
        EinsteinConfig {
            grid_num: default_einstein_grid_num(),
            grid_spacing: default_einstein_grid_spacing(),
        }
    }
}

impl Default for SlopeConfig {
    fn default() -> Self {
        SlopeConfig {
            num_points: default_slope_num_points(),
            delta_r: default_slope_delta_r(),
        }
    }
}

impl Default for RadialConfig {
    fn default() -> Self {
        RadialConfig {
            azimuthal_samples: default_azimuthal_samples(),
        }
    }
}

impl Default for MgeConfig {
    fn default() -> Self {
        MgeConfig {
            n_components: default_mge_components(),
            log_r_min: default_mge_log_r_min(),
            log_r_max: default_mge_log_r_max(),
            num_radii: default_mge_num_radii(),
        }
    }
}

impl Default for MassFractionConfig {
    fn default() -> Self {
        MassFractionConfig {
            grid_resolution: default_mass_fraction_resolution(),
        }
    }
}

impl Default for PeakConfig {
    fn default() -> Self {
        PeakConfig {
            grid_num: default_peak_grid_num(),
            grid_spacing: default_peak_grid_spacing(),
        }
    }
}

fn positive(name: &str, value: f64) -> LensResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LensError::ConfigError(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

fn nonzero(name: &str, value: usize) -> LensResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(LensError::ConfigError(format!("{name} must be at least 1")))
    }
}

impl AnalysisConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> LensResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> LensResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LensResult<()> {
        nonzero("einstein.grid_num", self.einstein.grid_num)?;
        positive("einstein.grid_spacing", self.einstein.grid_spacing)?;
        nonzero("slope.num_points", self.slope.num_points)?;
        positive("slope.delta_r", self.slope.delta_r)?;
        nonzero("radial.azimuthal_samples", self.radial.azimuthal_samples)?;
        nonzero("mge.n_components", self.mge.n_components)?;
        if self.mge.num_radii < 2 {
            return Err(LensError::ConfigError(
                "mge.num_radii must be at least 2".to_string(),
            ));
        }
        if !(self.mge.log_r_min.is_finite()
            && self.mge.log_r_max.is_finite()
            && self.mge.log_r_min < self.mge.log_r_max)
        {
            return Err(LensError::ConfigError(format!(
                "mge radius range is empty: 10^{} .. 10^{}",
                self.mge.log_r_min, self.mge.log_r_max
            )));
        }
        nonzero(
            "mass_fraction.grid_resolution",
            self.mass_fraction.grid_resolution,
        )?;
        nonzero("peak.grid_num", self.peak.grid_num)?;
        positive("peak.grid_spacing", self.peak.grid_spacing)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/lens-types/, the shared configs
    /// live two levels up.
    fn config_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_defaults() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.einstein.grid_num, 200);
        assert!((cfg.einstein.grid_spacing - 0.05).abs() < 1e-15);
        assert_eq!(cfg.slope.num_points, 10);
        assert_eq!(cfg.radial.azimuthal_samples, 20);
        assert_eq!(cfg.mge.n_components, 20);
        assert_eq!(cfg.mge.num_radii, 200);
        assert_eq!(cfg.mass_fraction.grid_resolution, 100);
        assert!((cfg.peak.grid_spacing - 0.01).abs() < 1e-15);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg = AnalysisConfig::from_json_str(r#"{"einstein": {"grid_num": 80}}"#).unwrap();
        assert_eq!(cfg.einstein.grid_num, 80);
        assert!((cfg.einstein.grid_spacing - 0.05).abs() < 1e-15);
        assert_eq!(cfg.peak, PeakConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AnalysisConfig::from_json_str(r#"{"peak": {"grid_spacing": -1.0}}"#)
            .unwrap_err();
        match err {
            LensError::ConfigError(msg) => assert!(msg.contains("peak.grid_spacing")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
        assert!(
            AnalysisConfig::from_json_str(r#"{"mge": {"log_r_min": 3.0}}"#).is_err(),
            "inverted radius range must fail"
        );
    }

    #[test]
    fn test_load_shipped_config() {
        let cfg = AnalysisConfig::from_file(&config_path("configs/analysis_fast.json")).unwrap();
        assert_eq!(cfg.einstein.grid_num, 100);
        assert!((cfg.einstein.grid_spacing - 0.05).abs() < 1e-15);
        assert_eq!(cfg.mge.n_components, 15);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = AnalysisConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }
}
