//! Spring presets
//!
//! Named spring tunings shared by every animation in the process. The table
//! is a `const`, so presets cannot be changed at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::spring::SpringConfig;

/// Named spring tuning
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpringPreset {
    /// Regular UI interactions
    #[default]
    Default,
    /// Quick, snappy responses
    Responsive,
    /// Smooth animations with visible overshoot
    Bouncy,
}

/// Preset registry, indexed by `SpringPreset as usize`
pub const SPRING_CONFIGS: [(SpringPreset, SpringConfig); 3] = [
    (
        SpringPreset::Default,
        SpringConfig::from_parts(300.0, 30.0, 1.0),
    ),
    (
        SpringPreset::Responsive,
        SpringConfig::from_parts(400.0, 40.0, 1.0),
    ),
    (
        SpringPreset::Bouncy,
        SpringConfig::from_parts(200.0, 20.0, 1.0),
    ),
];

impl SpringPreset {
    pub const ALL: [SpringPreset; 3] = [
        SpringPreset::Default,
        SpringPreset::Responsive,
        SpringPreset::Bouncy,
    ];

    /// Physical parameters for this preset
    pub const fn config(self) -> SpringConfig {
        SPRING_CONFIGS[self as usize].1
    }

    pub const fn name(self) -> &'static str {
        match self {
            SpringPreset::Default => "default",
            SpringPreset::Responsive => "responsive",
            SpringPreset::Bouncy => "bouncy",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            SpringPreset::Default => "Regular UI interactions",
            SpringPreset::Responsive => "Quick, snappy responses",
            SpringPreset::Bouncy => "Smooth, bouncy animations",
        }
    }
}

impl fmt::Display for SpringPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpringPreset {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        SpringPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| AnimationError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_discriminants() {
        for (index, (preset, _)) in SPRING_CONFIGS.iter().enumerate() {
            assert_eq!(*preset as usize, index);
        }
    }

    #[test]
    fn test_preset_values() {
        let default = SpringPreset::Default.config();
        assert_eq!(
            (default.stiffness(), default.damping(), default.mass()),
            (300.0, 30.0, 1.0)
        );

        let responsive = SpringPreset::Responsive.config();
        assert_eq!(
            (responsive.stiffness(), responsive.damping(), responsive.mass()),
            (400.0, 40.0, 1.0)
        );

        let bouncy = SpringPreset::Bouncy.config();
        assert_eq!(
            (bouncy.stiffness(), bouncy.damping(), bouncy.mass()),
            (200.0, 20.0, 1.0)
        );
    }

    #[test]
    fn test_presets_pass_validation() {
        for preset in SpringPreset::ALL {
            let config = preset.config();
            let checked =
                SpringConfig::new(config.stiffness(), config.damping(), config.mass()).unwrap();
            assert_eq!(checked, config);
        }
    }

    #[test]
    fn test_parse_and_display() {
        for preset in SpringPreset::ALL {
            assert_eq!(preset.to_string().parse::<SpringPreset>().unwrap(), preset);
        }
        assert_eq!(
            " Bouncy ".parse::<SpringPreset>().unwrap(),
            SpringPreset::Bouncy
        );
        assert_eq!(
            "wobbly".parse::<SpringPreset>(),
            Err(AnimationError::UnknownPreset("wobbly".to_string()))
        );
    }
}
