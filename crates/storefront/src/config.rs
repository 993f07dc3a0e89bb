//! Session configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `GOURMET_NOTIFICATIONS` - Initial notifications toggle (default: true)
//! - `GOURMET_LANGUAGE` - Initial preferred language (default: Spanish)
//! - `GOURMET_DARK_THEME` - Initial dark theme toggle (default: false)
//! - `GOURMET_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use thiserror::Error;

use gourmet_core::Language;

use crate::settings::Settings;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Settings the session starts with
    pub settings: Settings,
    /// Log output format for front-ends that install a subscriber
    pub log_format: LogFormat,
}

impl SessionConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let notifications_enabled = match lookup("GOURMET_NOTIFICATIONS") {
            Some(value) => parse_bool("GOURMET_NOTIFICATIONS", &value)?,
            None => defaults.notifications_enabled,
        };
        let language = match lookup("GOURMET_LANGUAGE") {
            Some(value) => value.parse::<Language>().map_err(|e| {
                ConfigError::InvalidEnvVar("GOURMET_LANGUAGE".to_string(), e.to_string())
            })?,
            None => defaults.language,
        };
        let dark_theme = match lookup("GOURMET_DARK_THEME") {
            Some(value) => parse_bool("GOURMET_DARK_THEME", &value)?,
            None => defaults.dark_theme,
        };
        let log_format = match lookup("GOURMET_LOG_FORMAT") {
            Some(value) => value
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::InvalidEnvVar("GOURMET_LOG_FORMAT".to_string(), e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            settings: Settings {
                notifications_enabled,
                language,
                dark_theme,
            },
            log_format,
        })
    }
}

/// Parse a boolean flag value (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`).
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` naming `key` for any other value.
pub fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got `{other}`"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SessionConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.settings.language, Language::Spanish);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("GOURMET_NOTIFICATIONS", "off"),
            ("GOURMET_LANGUAGE", "fr"),
            ("GOURMET_DARK_THEME", "1"),
            ("GOURMET_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert!(!config.settings.notifications_enabled);
        assert_eq!(config.settings.language, Language::French);
        assert!(config.settings.dark_theme);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_language() {
        let err = SessionConfig::from_lookup(lookup(&[("GOURMET_LANGUAGE", "klingon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "GOURMET_LANGUAGE"));
    }

    #[test]
    fn test_invalid_bool() {
        assert!(parse_bool("X", "maybe").is_err());
        assert!(parse_bool("X", " YES ").unwrap());
    }
}
