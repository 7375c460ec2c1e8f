use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Optional user configuration
///
/// Read from `~/.menu-tui/config.json` when present. With no file on
/// disk the defaults below apply unchanged, so the application runs
/// without any configuration step. Nothing is ever written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker prefixed to prices on the Menu screen
    pub currency_symbol: String,
    /// Event polling timeout in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    fn config_path() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".menu-tui").join("config.json"))
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
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.currency_symbol, "R");
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency_symbol": "$"}"#).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.tick_rate_ms, 100);
    }
}
