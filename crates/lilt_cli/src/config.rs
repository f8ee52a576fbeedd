//! Lilt configuration file handling

use anyhow::{Context, Result};
use lilt_animation::{SpringConfig, SpringPreset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE: &str = "lilt.toml";

/// Top-level Lilt configuration (lilt.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LiltConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Defaults for `lilt simulate`
#[derive(Debug, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Named preset to simulate
    #[serde(default)]
    pub preset: SpringPreset,
    /// Value the spring settles at
    #[serde(default = "default_target")]
    pub target: f64,
    /// Value the spring starts from
    #[serde(default)]
    pub from: f64,
    /// Stop after this many frames even if the spring has not settled
    #[serde(default = "default_max_frames")]
    pub max_frames: usize,
    /// Custom physics, used instead of `preset` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<CustomSpring>,
}

fn default_target() -> f64 {
    1.0
}

fn default_max_frames() -> usize {
    600
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            preset: SpringPreset::default(),
            target: default_target(),
            from: 0.0,
            max_frames: default_max_frames(),
            spring: None,
        }
    }
}

/// Explicit spring parameters
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CustomSpring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SimulationConfig {
    /// Resolve the physics to simulate, validating custom values
    pub fn spring_config(&self) -> Result<SpringConfig> {
        match self.spring {
            Some(custom) => SpringConfig::new(custom.stiffness, custom.damping, custom.mass)
                .context("Invalid [simulation.spring] section"),
            None => Ok(self.preset.config()),
        }
    }
}

impl LiltConfig {
    /// Load `path`, or `lilt.toml` from the working directory if it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::load_from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: LiltConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LiltConfig = toml::from_str("").unwrap();

        assert_eq!(config.simulation.preset, SpringPreset::Default);
        assert_eq!(config.simulation.target, 1.0);
        assert_eq!(config.simulation.from, 0.0);
        assert_eq!(config.simulation.max_frames, 600);
        assert!(config.simulation.spring.is_none());
    }

    #[test]
    fn test_preset_by_name() {
        let config: LiltConfig = toml::from_str(
            r#"
            [simulation]
            preset = "bouncy"
            target = 250.0
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.preset, SpringPreset::Bouncy);
        assert_eq!(config.simulation.target, 250.0);
        assert_eq!(
            config.simulation.spring_config().unwrap(),
            SpringPreset::Bouncy.config()
        );
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let result = toml::from_str::<LiltConfig>(
            r#"
            [simulation]
            preset = "wobbly"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_spring_is_validated() {
        let config: LiltConfig = toml::from_str(
            r#"
            [simulation.spring]
            stiffness = 120.0
            damping = 14.0
            mass = 0.0
            "#,
        )
        .unwrap();

        let err = config.simulation.spring_config().unwrap_err();
        assert!(format!("{err:#}").contains("mass"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = LiltConfig::default();
        config.simulation.preset = SpringPreset::Responsive;

        let text = config.to_toml().unwrap();
        let parsed: LiltConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.simulation.preset, SpringPreset::Responsive);
    }
}
