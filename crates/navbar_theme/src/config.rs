//! Navigation configuration file handling

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::tokens::Density;

/// Top-level widget configuration (navbar.toml)
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NavigationConfig {
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Emit verbose sizing and scroll traces
    #[serde(default)]
    pub debug: bool,
}

/// Scroll behavior configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BehaviorConfig {
    /// Hide/show the bar in response to nested scrolling
    #[serde(default = "default_true")]
    pub scrollable: bool,
    /// Show/hide animation duration
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u32,
    /// Platform minimum touch travel; the hide/show threshold is twice this
    #[serde(default = "default_touch_slop")]
    pub touch_slop_px: i32,
    /// Fling speed (px/s) that forces a direction change
    #[serde(default = "default_fling_threshold")]
    pub fling_velocity_threshold: f32,
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u32 {
    300
}

fn default_touch_slop() -> i32 {
    8
}

fn default_fling_threshold() -> f32 {
    1000.0
}

impl BehaviorConfig {
    /// Accumulated scroll distance that triggers a transition
    pub fn scroll_threshold(&self) -> i32 {
        self.touch_slop_px * 2
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scrollable: true,
            animation_duration_ms: default_animation_duration(),
            touch_slop_px: default_touch_slop(),
            fling_velocity_threshold: default_fling_threshold(),
        }
    }
}

/// Where the widget is anchored in its host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    #[default]
    Bottom,
    Left,
    Right,
}

impl Gravity {
    /// Side anchors render as a vertical rail
    pub fn is_tablet(&self) -> bool {
        matches!(self, Gravity::Left | Gravity::Right)
    }
}

/// Layout configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Pixels per dp
    #[serde(default = "default_density")]
    pub density: f32,
    /// Keep labels on every item, forcing the fixed policy
    #[serde(default)]
    pub always_show_labels: bool,
    #[serde(default)]
    pub gravity: Gravity,
}

fn default_density() -> f32 {
    1.0
}

impl LayoutConfig {
    pub fn density(&self) -> Density {
        Density(self.density)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            density: default_density(),
            always_show_labels: false,
            gravity: Gravity::default(),
        }
    }
}

impl NavigationConfig {
    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NavigationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, or a directory holding `navbar.toml`
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("navbar.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;

        tracing::debug!(path = %config_path.display(), "loading navigation config");
        Self::from_toml_str(&content)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.layout.density.is_nan() || self.layout.density <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "layout.density must be positive, got {}",
                self.layout.density
            )));
        }
        if self.behavior.touch_slop_px < 0 {
            return Err(ConfigError::Invalid(format!(
                "behavior.touch_slop_px must not be negative, got {}",
                self.behavior.touch_slop_px
            )));
        }
        if self.behavior.fling_velocity_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "behavior.fling_velocity_threshold must not be negative, got {}",
                self.behavior.fling_velocity_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = NavigationConfig::from_toml_str("").unwrap();
        assert_eq!(config, NavigationConfig::default());
        assert!(config.behavior.scrollable);
        assert_eq!(config.behavior.scroll_threshold(), 16);
        assert_eq!(config.layout.gravity, Gravity::Bottom);
    }

    #[test]
    fn test_partial_sections() {
        let config = NavigationConfig::from_toml_str(
            r#"
            debug = true

            [behavior]
            touch_slop_px = 12

            [layout]
            gravity = "right"
            always_show_labels = true
            "#,
        )
        .unwrap();

        assert!(config.debug);
        assert_eq!(config.behavior.scroll_threshold(), 24);
        assert_eq!(config.behavior.animation_duration_ms, 300);
        assert!(config.layout.gravity.is_tablet());
        assert!(config.layout.always_show_labels);
    }

    #[test]
    fn test_rejects_invalid_density() {
        let err = NavigationConfig::from_toml_str("[layout]\ndensity = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = NavigationConfig::from_toml_str("[behavior\nscrollable = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = NavigationConfig::default();
        config.layout.gravity = Gravity::Left;
        config.behavior.fling_velocity_threshold = 1500.0;

        let text = config.to_toml().unwrap();
        assert_eq!(NavigationConfig::from_toml_str(&text).unwrap(), config);
    }
}
