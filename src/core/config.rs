//! Engine configuration with documented settings
//!
//! The host reads these from its own settings UI or a TOML file and hands
//! them to the engine. The engine reads them every cycle and never writes
//! them back.

use serde::Deserialize;
use thiserror::Error;

use crate::core::types::ActionKind;
use crate::host::KeyBinding;

/// Settings for one managed action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// Whether this action is evaluated at all.
    pub enabled: bool,

    /// Virtual-key code injected when the action fires.
    pub key: KeyBinding,

    /// Skill-bar slot the granting skill must occupy.
    ///
    /// Slots are 1-based here; the host reports 0-based indices and the
    /// engine subtracts one when matching.
    pub skill_slot: i32,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // 'E'
            key: KeyBinding(0x45),
            skill_slot: 1,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuffwatchConfig {
    /// Master switch; nothing is evaluated while false.
    pub enabled: bool,

    /// Emit the per-decision debug messages (skill not found, proximity
    /// check failed, casting).
    pub debug: bool,

    pub blood_rage: ActionConfig,
    pub steel_skin: ActionConfig,

    /// When true, actions only fire with at least `nearby_monster_count`
    /// qualifying monsters within `nearby_monster_max_distance` of the
    /// player.
    pub require_min_monster_count: bool,

    /// Minimum number of qualifying monsters near the player.
    pub nearby_monster_count: usize,

    /// Radius of the proximity check, in world units.
    pub nearby_monster_max_distance: f32,
}

impl Default for BuffwatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            blood_rage: ActionConfig {
                enabled: true,
                // 'E'
                key: KeyBinding(0x45),
                skill_slot: 1,
            },
            steel_skin: ActionConfig {
                enabled: true,
                // 'R'
                key: KeyBinding(0x52),
                skill_slot: 2,
            },
            require_min_monster_count: false,
            nearby_monster_count: 1,
            nearby_monster_max_distance: 500.0,
        }
    }
}

impl BuffwatchConfig {
    pub fn action(&self, kind: ActionKind) -> &ActionConfig {
        match kind {
            ActionKind::BloodRage => &self.blood_rage,
            ActionKind::SteelSkin => &self.steel_skin,
        }
    }

    /// Validate settings consistency.
    pub fn validate(&self) -> Result<(), String> {
        for (name, action) in [("blood_rage", &self.blood_rage), ("steel_skin", &self.steel_skin)] {
            if action.skill_slot < 1 {
                return Err(format!(
                    "{name}.skill_slot is 1-based and must be >= 1, got {}",
                    action.skill_slot
                ));
            }
        }

        if self.nearby_monster_max_distance <= 0.0 {
            return Err(format!(
                "nearby_monster_max_distance must be positive, got {}",
                self.nearby_monster_max_distance
            ));
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate().map_err(ConfigLoadError::Invalid)?;
        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, Clone, Error)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BuffwatchConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.enabled);
        assert!(!config.require_min_monster_count);
    }

    #[test]
    fn test_toml_parsing() {
        let toml_content = r#"
            enabled = true
            debug = true
            require_min_monster_count = true
            nearby_monster_count = 3
            nearby_monster_max_distance = 250.0

            [blood_rage]
            enabled = true
            key = 0x51
            skill_slot = 4

            [steel_skin]
            enabled = false
        "#;

        let config = BuffwatchConfig::parse_toml(toml_content).expect("Failed to parse TOML");
        assert!(config.debug);
        assert_eq!(config.nearby_monster_count, 3);
        assert_eq!(config.blood_rage.key, KeyBinding(0x51));
        assert_eq!(config.blood_rage.skill_slot, 4);
        assert!(!config.steel_skin.enabled);
        // Missing fields fall back to defaults
        assert_eq!(config.steel_skin.skill_slot, 1);
    }

    #[test]
    fn test_toml_invalid_slot() {
        let toml_content = r#"
            [steel_skin]
            skill_slot = 0
        "#;

        let result = BuffwatchConfig::parse_toml(toml_content);
        assert!(matches!(result, Err(ConfigLoadError::Invalid(_))));
    }

    #[test]
    fn test_invalid_distance() {
        let config = BuffwatchConfig {
            nearby_monster_max_distance: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
