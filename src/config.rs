//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::error::Result;

/// Configuration for the study-sheet CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default musical key for Roman-numeral annotation.
    pub key: String,
    /// Path to a user keymaps JSON overriding the bundled tables, if any.
    pub keymaps_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: "C".to_string(),
            keymaps_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(key) = env::var("CHORDSTUDY_KEY") {
            if !key.trim().is_empty() {
                config.key = key.trim().to_string();
            }
        }

        if let Ok(path) = env::var("CHORDSTUDY_KEYMAPS") {
            config.keymaps_path = Some(PathBuf::from(path));
        } else {
            config.keymaps_path = default_keymaps_path();
        }

        Ok(config)
    }
}

/// The default user keymaps location (`~/.config/chordstudy/keymaps.json`),
/// only when the file exists.
fn default_keymaps_path() -> Option<PathBuf> {
    let dir = dirs::config_dir()?;
    let path = dir.join("chordstudy").join("keymaps.json");
    path.is_file().then_some(path)
}
