//! Hosting-layer configuration file
//!
//! `~/.lending-tui/config.json`: where to find the model file and how
//! fast to poll events. The rendering core never reads this; absence of
//! a config simply means the built-in sample model.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to a dashboard model file (.json or .yml)
    #[serde(default)]
    pub model_path: Option<String>,
    /// Event polling timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".lending-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.model_path, None);
        assert_eq!(config.tick_rate_ms, 250);

        let config: Config =
            serde_json::from_str(r#"{"model_path": "dash.yml", "tick_rate_ms": 100}"#).unwrap();
        assert_eq!(config.model_path.as_deref(), Some("dash.yml"));
        assert_eq!(config.tick_rate_ms, 100);
    }
}
