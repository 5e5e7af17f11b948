// ABOUTME: Configuration module for the vitality application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::watch::WatchConfig;
use std::env;
use std::path::PathBuf;

const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub debounce_ms: u64,
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            pretty_json: true,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("VITALITY_DEBOUNCE_MS").ok(),
            env::var("VITALITY_PRETTY").ok(),
        )
    }

    fn from_vars(debounce_ms: Option<String>, pretty: Option<String>) -> Self {
        let debounce_ms = debounce_ms
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);
        let pretty_json = pretty
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            debounce_ms,
            pretty_json,
        }
    }

    /// Get a watch configuration with defaults from this config
    pub fn get_watch_config(&self, config_path: PathBuf, output: PathBuf) -> WatchConfig {
        WatchConfig {
            config_path,
            output,
            debounce_ms: self.debounce_ms,
            pretty_json: self.pretty_json,
        }
    }
}
