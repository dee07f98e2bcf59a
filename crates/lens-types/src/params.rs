// ─────────────────────────────────────────────────────────────────────
// SCPN Lens Core — Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lens parameter records and component selection.
//!
//! A parameter set is an ordered list of per-component records. Component 0 is
//! the primary deflector and provides the default analysis center.

use crate::error::{LensError, LensResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Named float parameters of a single lens component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentParams(BTreeMap<String, f64>);

impl ComponentParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.0.insert(name.to_string(), value);
        self
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    /// Value of a mandatory parameter.
    pub fn require(&self, name: &str) -> LensResult<f64> {
        self.get(name).ok_or_else(|| LensError::MissingParameter {
            name: name.to_string(),
        })
    }

    /// `(center_x, center_y)`, defaulting each coordinate to 0.
    pub fn center_or_origin(&self) -> (f64, f64) {
        (self.get_or("center_x", 0.0), self.get_or("center_y", 0.0))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl fmt::Display for ComponentParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// Ordered per-component parameters of a lens model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LensParameterSet(Vec<ComponentParams>);

impl LensParameterSet {
    pub fn new(components: Vec<ComponentParams>) -> Self {
        Self(components)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn component(&self, index: usize) -> LensResult<&ComponentParams> {
        self.0.get(index).ok_or(LensError::ComponentOutOfRange {
            index,
            len: self.0.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentParams> {
        self.0.iter()
    }

    /// Center of the primary deflector (component 0).
    ///
    /// Both `center_x` and `center_y` must be present.
    pub fn primary_center(&self) -> LensResult<(f64, f64)> {
        let primary = self.component(0)?;
        Ok((primary.require("center_x")?, primary.require("center_y")?))
    }

    /// Default-resolution rule for analysis centers: an explicit center always
    /// wins, otherwise the primary deflector's center is used.
    pub fn resolve_center(&self, center: Option<(f64, f64)>) -> LensResult<(f64, f64)> {
        match center {
            Some(c) => Ok(c),
            None => self.primary_center(),
        }
    }
}

impl From<Vec<ComponentParams>> for LensParameterSet {
    fn from(components: Vec<ComponentParams>) -> Self {
        Self(components)
    }
}

impl fmt::Display for LensParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, "]")
    }
}

/// Which lens components take part in an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComponentSelector {
    #[default]
    All,
    Subset(BTreeSet<usize>),
}

impl ComponentSelector {
    pub fn only(index: usize) -> Self {
        ComponentSelector::Subset(BTreeSet::from([index]))
    }

    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        ComponentSelector::Subset(indices.into_iter().collect())
    }

    /// Selector from a boolean list aligned with the components.
    pub fn from_mask(mask: &[bool]) -> Self {
        Self::from_indices(
            mask.iter()
                .enumerate()
                .filter_map(|(i, &keep)| keep.then_some(i)),
        )
    }

    pub fn includes(&self, index: usize) -> bool {
        match self {
            ComponentSelector::All => true,
            ComponentSelector::Subset(set) => set.contains(&index),
        }
    }

    /// Reject indices beyond a model of `len` components.
    pub fn validate(&self, len: usize) -> LensResult<()> {
        if let ComponentSelector::Subset(set) = self {
            if let Some(&index) = set.iter().find(|&&i| i >= len) {
                return Err(LensError::ComponentOutOfRange { index, len });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sis(theta_e: f64, cx: f64, cy: f64) -> ComponentParams {
        ComponentParams::new()
            .with("theta_E", theta_e)
            .with("center_x", cx)
            .with("center_y", cy)
    }

    #[test]
    fn test_resolve_center_prefers_explicit() {
        let params = LensParameterSet::new(vec![sis(1.0, 0.3, -0.2)]);
        assert_eq!(params.resolve_center(None).unwrap(), (0.3, -0.2));
        assert_eq!(
            params.resolve_center(Some((1.0, 2.0))).unwrap(),
            (1.0, 2.0)
        );
    }

    #[test]
    fn test_primary_center_requires_fields() {
        let params = LensParameterSet::new(vec![ComponentParams::new().with("gamma1", 0.1)]);
        match params.primary_center() {
            Err(LensError::MissingParameter { name }) => assert_eq!(name, "center_x"),
            other => panic!("expected MissingParameter, got {other:?}"),
        }
        let empty = LensParameterSet::default();
        assert!(matches!(
            empty.primary_center(),
            Err(LensError::ComponentOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_selector_mask_and_validation() {
        let sel = ComponentSelector::from_mask(&[true, false, true]);
        assert!(sel.includes(0));
        assert!(!sel.includes(1));
        assert!(sel.includes(2));
        assert!(sel.validate(3).is_ok());
        assert!(matches!(
            sel.validate(2),
            Err(LensError::ComponentOutOfRange { index: 2, len: 2 })
        ));
        assert!(ComponentSelector::All.validate(0).is_ok());
        assert!(ComponentSelector::default().includes(42));
    }

    #[test]
    fn test_display_is_compact() {
        let params = LensParameterSet::new(vec![sis(1.5, 0.0, 0.0)]);
        assert_eq!(
            params.to_string(),
            "[{center_x: 0, center_y: 0, theta_E: 1.5}]"
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let json = r#"[{"theta_E": 1.2, "center_x": 0.1, "center_y": 0.0}, {"gamma1": 0.05, "gamma2": -0.02}]"#;
        let params: LensParameterSet = serde_json::from_str(json).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.component(1).unwrap().get("gamma2"), Some(-0.02));
        let back = serde_json::to_string(&params).unwrap();
        let again: LensParameterSet = serde_json::from_str(&back).unwrap();
        assert_eq!(params, again);
    }
}
