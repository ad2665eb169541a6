//! Application configuration, loaded from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key-read timeout in milliseconds; each timeout triggers a size check.
    pub timeout_ms: u64,
    /// Key names that stop the application, e.g. `"ctrl-c"` or `"q"`.
    pub quit_keys: Vec<String>,
    /// Terminal rows left unused at the bottom of the screen.
    pub reserved_rows: usize,
    /// `EnvFilter` directive for the demo's log subscriber.
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 500,
            quit_keys: vec!["ctrl-c".to_string()],
            reserved_rows: 1,
            log_filter: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.quit_keys()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Parsed quit keys. Fails on the first unknown key name.
    pub fn quit_keys(&self) -> Result<Vec<Key>> {
        self.quit_keys
            .iter()
            .map(|name| Key::parse(name).ok_or_else(|| Error::InvalidKey(name.clone())))
            .collect()
    }
}
