//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use crate::error::{Error, Result};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Configuration for the question bank.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory holding questions.json, books.json and themes.json
    pub data_dir: PathBuf,
    /// Default cap on questions per theme when assembling a study
    pub max_per_theme: Option<usize>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let data_dir = env::var("STUDYBANK_DATA_DIR").map_or_else(
            |_| default_data_dir(),
            |path| Some(PathBuf::from(shellexpand::tilde(&path).to_string())),
        );

        let Some(data_dir) = data_dir else {
            return Err(Error::config(
                "no data directory available".to_string(),
                "Set STUDYBANK_DATA_DIR to the directory holding the bank's JSON files",
            ));
        };

        // Per-theme cap can be configured via environment; unset or
        // unparseable means uncapped
        let max_per_theme = env::var("STUDYBANK_MAX_PER_THEME")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());

        Ok(Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir,
            max_per_theme,
        })
    }
}

/// Platform data directory fallback (e.g. `~/.local/share/studybank`).
fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("studybank"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_load_has_package_metadata() {
        let config = Config::load().unwrap();
        assert_eq!(config.app_name(), "studybank");
        assert!(!config.app_version().is_empty());
    }
}
