//! User preferences.
//!
//! Stored at `~/.config/campbase/config.json` (platform config dir). A
//! missing file means defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Accommodation;

/// Application name used for config/data directory paths
const APP_NAME: &str = "campbase";

const CONFIG_FILE: &str = "config.json";

const DRAFTS_DIR: &str = "drafts";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Overrides the platform data directory for saved drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drafts_dir: Option<PathBuf>,
    /// Lodging mode for the placeholder segment of new drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_accommodation: Option<Accommodation>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn drafts_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.drafts_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME).join(DRAFTS_DIR))
    }

    pub fn default_accommodation(&self) -> Accommodation {
        self.default_accommodation.unwrap_or_default()
    }
}
