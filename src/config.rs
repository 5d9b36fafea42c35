//! View configuration and serializable options.
//!
//! `ViewConfig` is the external, read-only zoom request this core consumes;
//! `CanvasConfig` bundles it with the modifier bindings into a versioned
//! JSON document so hosts can persist and restore viewer settings.

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_VERSION;
use crate::error::CanvasError;
use crate::input::KeyBindings;

/// Desired zoom and anchor point, read once per rescale trigger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Requested zoom factor.
    pub view_scale: f64,
    /// Anchor X in image coordinates; negative means "viewport center".
    pub view_offset_x: f64,
    /// Anchor Y in image coordinates; negative means "viewport center".
    pub view_offset_y: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_scale: 1.0,
            view_offset_x: -1.0,
            view_offset_y: -1.0,
        }
    }
}

impl ViewConfig {
    /// A zoom request anchored at the viewport center.
    pub fn centered(view_scale: f64) -> Self {
        Self {
            view_scale,
            ..Self::default()
        }
    }

    /// A zoom request anchored at a specific image point.
    pub fn anchored(view_scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            view_scale,
            view_offset_x: offset_x,
            view_offset_y: offset_y,
        }
    }
}

/// Viewer settings that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// View state to restore
    #[serde(default)]
    pub view: ViewConfig,

    /// Modifier-key bindings
    #[serde(default)]
    pub bindings: KeyBindings,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            view: ViewConfig::default(),
            bindings: KeyBindings::default(),
        }
    }
}

impl CanvasConfig {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        let config: CanvasConfig = serde_json::from_str(json)?;
        if config.version != CONFIG_VERSION {
            return Err(CanvasError::VersionMismatch {
                expected: CONFIG_VERSION,
                found: config.version,
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;

    #[test]
    fn test_view_config_constructors() {
        let c = ViewConfig::centered(2.0);
        assert_eq!(c.view_scale, 2.0);
        assert!(c.view_offset_x < 0.0 && c.view_offset_y < 0.0);

        let a = ViewConfig::anchored(1.5, 200.0, 150.0);
        assert_eq!((a.view_offset_x, a.view_offset_y), (200.0, 150.0));
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = CanvasConfig::default();
        config.view = ViewConfig::anchored(2.5, 10.0, 20.0);
        config.bindings.pan = Key::Space;

        let json = config.to_json().unwrap();
        let parsed = CanvasConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_version_mismatch() {
        let json = r#"{"version": 99}"#;
        match CanvasConfig::from_json(json) {
            Err(CanvasError::VersionMismatch { expected, found }) => {
                assert_eq!(expected, CONFIG_VERSION);
                assert_eq!(found, 99);
            }
            other => panic!("expected version mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_config_invalid_json() {
        assert!(matches!(
            CanvasConfig::from_json("not json"),
            Err(CanvasError::Json(_))
        ));
    }
}
