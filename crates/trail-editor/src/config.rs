//! Viewer configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use trail_core::{NetworkError, TrailNetwork};

/// Tunables for a trail viewer.
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Wall-clock time for a released path spanning the full viewport
    /// diagonal to retract completely. Default: **1000 ms**.
    pub crossing_duration_ms: f64,

    /// Cell size (network units) of the nearest-point grid, or `None` to
    /// scan every trail segment. Default: **25**.
    pub closest_point_mesh: Option<f64>,

    /// Center the junction bounding box on the origin after loading, so the
    /// network sits in the middle of the viewport. Default: **true**.
    pub recenter_network: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            crossing_duration_ms: 1000.0,
            closest_point_mesh: Some(25.0),
            recenter_network: true,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.crossing_duration_ms.is_finite() && self.crossing_duration_ms > 0.0) {
            return Err(ConfigError::InvalidCrossingDuration(self.crossing_duration_ms));
        }
        Ok(())
    }

    /// Apply load-time network preparation (recentering, then the mesh).
    pub fn prepare_network(&self, network: TrailNetwork) -> Result<TrailNetwork, NetworkError> {
        let network = if self.recenter_network {
            network.recentered()?
        } else {
            network
        };
        match self.closest_point_mesh {
            Some(cell) => network.with_closest_point_mesh(cell),
            None => Ok(network),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = ViewerConfig::from_json(r#"{ "crossingDurationMs": 10000 }"#).unwrap();
        assert_eq!(config.crossing_duration_ms, 10000.0);
        assert_eq!(config.closest_point_mesh, Some(25.0));
        assert!(config.recenter_network);
    }

    #[test]
    fn null_mesh_disables_it() {
        let config = ViewerConfig::from_json(r#"{ "closestPointMesh": null }"#).unwrap();
        assert_eq!(config.closest_point_mesh, None);
    }

    #[test]
    fn rejects_non_positive_duration() {
        let err = ViewerConfig::from_json(r#"{ "crossingDurationMs": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCrossingDuration(_)));
    }
}
