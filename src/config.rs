//! Configuration loading
//!
//! Defaults, then `<config_dir>/grounded-search/config.json`, then environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_GOES_HERE";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Persona sent as the system instruction with every query
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful and concise fact-checker. Answer the user's question based *only* on the provided search results. Your answer must be a single, clear paragraph. Do not add any greeting or sign-off. Do not use your own knowledge.";

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GROUNDED_SEARCH_MODEL";
pub const ENV_ENDPOINT: &str = "GROUNDED_SEARCH_ENDPOINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub system_prompt: String,
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout_secs: None,
        }
    }
}

/// On-disk shape; every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    system_prompt: Option<String>,
    timeout_secs: Option<u64>,
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("grounded-search").join("config.json"))
    }

    /// Load from the default location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::default_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from an optional file, then apply overrides from `env`.
    ///
    /// A missing file is skipped; an unreadable or malformed one is an error.
    pub fn load_from(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path.filter(|p| p.exists()) {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let file: FileConfig =
                serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            config.merge(file);
            tracing::debug!("Loaded config from {:?}", path);
        }

        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_empty(ENV_API_KEY) {
            config.api_key = key;
        }
        if let Some(model) = non_empty(ENV_MODEL) {
            config.model = model;
        }
        if let Some(endpoint) = non_empty(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }

        Ok(config)
    }

    fn merge(&mut self, file: FileConfig) {
        if let Some(api_key) = file.api_key {
            self.api_key = api_key;
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(endpoint) = file.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(system_prompt) = file.system_prompt {
            self.system_prompt = system_prompt;
        }
        if file.timeout_secs.is_some() {
            self.timeout_secs = file.timeout_secs;
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn has_placeholder_key(&self) -> bool {
        self.api_key == PLACEHOLDER_API_KEY
    }
}
