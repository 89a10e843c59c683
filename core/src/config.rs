//! Engine and playback configuration
//!
//! There are no configuration files or environment variables: a host builds
//! these values in-process, or parses them from a JSON string it already has.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::execution::history::Speed;
use crate::i18n::Locale;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Trace generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Locale used when the host does not ask for one
    pub default_locale: Locale,

    /// Upper bound on the length of any trace; longer traces are rejected
    /// by `Catalog::generate` and reported by `validate_catalog`
    pub max_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::En,
            max_steps: 200,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::Invalid("maxSteps must be positive".to_owned()));
        }
        Ok(())
    }
}

/// Playback timer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaybackConfig {
    /// Tick interval in milliseconds for each speed level, slowest first
    pub intervals_ms: [u64; Speed::LEVELS],

    /// Speed selected when a trace is loaded
    pub default_speed: Speed,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            intervals_ms: [1500, 800, 400, 150, 50],
            default_speed: Speed::default(),
        }
    }
}

impl PlaybackConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = self.intervals_ms.iter().position(|&ms| ms == 0) {
            return Err(ConfigError::Invalid(format!("interval for speed level {} is zero", level + 1)));
        }
        Ok(())
    }

    /// Interval for `speed`
    pub fn interval(&self, speed: Speed) -> std::time::Duration {
        std::time::Duration::from_millis(self.intervals_ms[speed.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let engine = EngineConfig::default();
        assert_eq!(engine.default_locale, Locale::En);
        assert_eq!(engine.max_steps, 200);

        let playback = PlaybackConfig::default();
        assert_eq!(playback.default_speed.level(), 3);
        assert_eq!(playback.interval(playback.default_speed).as_millis(), 400);
        assert!(playback.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_json() {
        let engine = EngineConfig::from_json_str(r#"{"defaultLocale": "es"}"#).unwrap();
        assert_eq!(engine.default_locale, Locale::Es);
        assert_eq!(engine.max_steps, 200);

        let playback = PlaybackConfig::from_json_str(r#"{"defaultSpeed": 5}"#).unwrap();
        assert_eq!(playback.interval(playback.default_speed).as_millis(), 50);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"maxSteps": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PlaybackConfig::from_json_str(r#"{"intervalsMs": [1500, 0, 400, 150, 50]}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PlaybackConfig::from_json_str(r#"{"defaultSpeed": 9}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(EngineConfig::from_json_str("not json"), Err(ConfigError::Parse(_))));
    }
}
