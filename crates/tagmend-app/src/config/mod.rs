//! Configuration file parsing for tagmend
//!
//! Reads `config.toml` from the platform config dir
//! (e.g. `~/.config/tagmend/config.toml`). A missing or unparseable file
//! falls back to defaults. The API credential is never read from the file;
//! it comes from the `TAGMEND_API_KEY` environment variable only.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILENAME: &str = "config.toml";

/// Top-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub collaborator: CollaboratorSettings,
}

/// Collaborator endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollaboratorSettings {
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for CollaboratorSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

/// Load settings from the platform config dir, falling back to defaults.
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from a specific file, falling back to defaults.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tagmend").join(CONFIG_FILENAME))
}
