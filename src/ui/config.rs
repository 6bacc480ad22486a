//! # Configuration Persistence
//!
//! Visitor preferences stored in `~/.config/lisco-portfolio/config.json`.
//!
//! ```json
//! {
//!   "theme": "Catppuccin Mocha",
//!   "boot_animation": true
//! }
//! ```
//!
//! The `directories` crate resolves the platform config directory. Command
//! line flags override whatever is loaded here; `--save-config` writes the
//! effective values back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Play the staggered boot sequence on startup.
    #[serde(default = "default_boot_animation")]
    pub boot_animation: bool,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_boot_animation() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            boot_animation: default_boot_animation(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults on any
    /// error.
    pub fn load() -> Self {
        match Self::config_path().and_then(|p| Self::load_from(&p)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("using default config: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields `Config::default()`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save to the default location and return the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "lisco-portfolio")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
