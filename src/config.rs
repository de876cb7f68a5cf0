use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// How long a status-bar notification stays visible, in milliseconds.
    #[serde(default = "default_status_timeout")]
    pub status_timeout_ms: u64,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_status_timeout() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            status_timeout_ms: default_status_timeout(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}
