// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Speed of light (m/s)
pub const C_LIGHT: f64 = 2.997_924_58e8;

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G_NEWTON: f64 = 6.674_08e-11;

/// Megaparsec (m)
pub const MPC_M: f64 = 3.085_677_581_49e22;

/// Solar mass (kg)
pub const M_SUN: f64 = 1.988_55e30;

/// One arcsecond in radians
pub const ARCSEC_RAD: f64 = 2.0 * std::f64::consts::PI / 360.0 / 3600.0;

/// Seconds per day
pub const DAY_S: f64 = 86_400.0;

/// Convergence level that defines the Einstein radius (mean enclosed κ = 1).
pub const CRITICAL_MEAN_CONVERGENCE: f64 = 1.0;
