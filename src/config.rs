//! Configuration
//!
//! JSON config with per-field defaults; every field is optional on disk.
//! A missing or unparsable file falls back to the defaults with a logged
//! warning rather than refusing to start.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prompt label rendered before the input, and echoed on submit
    #[serde(default = "default_prompt_label")]
    pub prompt_label: String,

    /// Start in day mode instead of night mode
    #[serde(default)]
    pub start_in_day_mode: bool,

    #[serde(default)]
    pub intro: IntroConfig,
}

fn default_prompt_label() -> String {
    "explorer@kprsnt.in:~%".to_string()
}

/// Header intro typing effect configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Delay between revealed characters, in milliseconds
    #[serde(default = "default_intro_interval")]
    pub interval_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_intro_interval() -> u64 {
    100
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: default_intro_interval(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt_label: default_prompt_label(),
            start_in_day_mode: false,
            intro: IntroConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load from `path` if given, falling back to defaults when the file is
    /// absent or invalid.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Default config location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
    }
}
