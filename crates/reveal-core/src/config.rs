//! Runtime configuration for the reveal pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{RevealError, Result};
use crate::tolerance::Tolerance;
use crate::traits::Validate;

/// Tunables shared by every frame of a reveal animation.
///
/// All fields have defaults, so a JSON document only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Triangles emitted per bezier segment when fully drawn.
    pub subdivisions_per_segment: u32,
    /// Inset applied after mapping into device space, keeps the stroke off the surface edge.
    pub device_inset: f64,
    /// Display scale used for paths built without an explicit scale.
    pub display_scale: f64,
    /// Marker radius as a fraction of the normalized stroke width.
    pub marker_radius_factor: f64,
    pub tolerance: Tolerance,
}

impl RevealConfig {
    pub const DEFAULT_SUBDIVISIONS: u32 = 300;
    pub const DEFAULT_INSET: f64 = 0.9;

    /// Largest subdivision count whose index buffer still fits in `u16`:
    /// subdivision `s - 1` references vertex `s + 1`.
    pub const MAX_SUBDIVISIONS: u32 = u16::MAX as u32 - 1;

    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions_per_segment = subdivisions;
        self
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            subdivisions_per_segment: Self::DEFAULT_SUBDIVISIONS,
            device_inset: Self::DEFAULT_INSET,
            display_scale: 1.0,
            marker_radius_factor: 0.5,
            tolerance: Tolerance::default(),
        }
    }
}

impl Validate for RevealConfig {
    fn validate(&self) -> Result<()> {
        if self.subdivisions_per_segment == 0 {
            return Err(RevealError::configuration(
                "subdivisions_per_segment must be positive",
            ));
        }
        if self.subdivisions_per_segment > Self::MAX_SUBDIVISIONS {
            return Err(RevealError::configuration(format!(
                "subdivisions_per_segment {} exceeds u16 index range (max {})",
                self.subdivisions_per_segment,
                Self::MAX_SUBDIVISIONS
            )));
        }
        if !(self.device_inset > 0.0 && self.device_inset <= 1.0) {
            return Err(RevealError::configuration(format!(
                "device_inset must be in (0, 1], got {}",
                self.device_inset
            )));
        }
        if !(self.display_scale > 0.0) {
            return Err(RevealError::configuration(format!(
                "display_scale must be positive, got {}",
                self.display_scale
            )));
        }
        if !(self.marker_radius_factor > 0.0) {
            return Err(RevealError::configuration(format!(
                "marker_radius_factor must be positive, got {}",
                self.marker_radius_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.subdivisions_per_segment, 300);
        assert_eq!(config.device_inset, 0.9);
        assert_eq!(config.display_scale, 1.0);
        assert_eq!(config.marker_radius_factor, 0.5);
        config.validate().unwrap();
    }

    #[test]
    fn test_from_json_partial() {
        let config = RevealConfig::from_json_str(r#"{ "subdivisions_per_segment": 64 }"#).unwrap();
        assert_eq!(config.subdivisions_per_segment, 64);
        assert_eq!(config.device_inset, 0.9);
    }

    #[test]
    fn test_from_json_rejects_zero_subdivisions() {
        let err = RevealConfig::from_json_str(r#"{ "subdivisions_per_segment": 0 }"#).unwrap_err();
        assert!(matches!(err, RevealError::Configuration(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = RevealConfig::from_json_str("{ subdivisions").unwrap_err();
        assert!(matches!(err, RevealError::Parse(_)));
    }

    #[test]
    fn test_validate_ranges() {
        let too_many = RevealConfig::default().with_subdivisions(RevealConfig::MAX_SUBDIVISIONS + 1);
        assert!(too_many.validate().is_err());

        let bad_inset = RevealConfig {
            device_inset: 1.5,
            ..RevealConfig::default()
        };
        assert!(bad_inset.validate().is_err());

        let bad_scale = RevealConfig {
            display_scale: 0.0,
            ..RevealConfig::default()
        };
        assert!(bad_scale.validate().is_err());
    }
}
