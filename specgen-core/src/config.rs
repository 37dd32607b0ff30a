//! Configuration for generation and output
//!
//! Loaded from an optional TOML file. Every key has a default, so an empty
//! file (or no file at all) gives a working setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the project root when none is given explicitly
pub const CONFIG_FILE_NAME: &str = "specgen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecGenConfig {
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

impl SpecGenConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Use `explicit` when given, else `<root>/specgen.toml` when present,
    /// else defaults
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("Loading config from {}", candidate.display());
            return Self::from_file(&candidate);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}

/// Remote generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Set to false to always use the local generator
    pub enabled: bool,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub endpoint: String,
    pub api_version: String,
    pub model: String,
    pub max_tokens: usize,
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            api_version: "2023-06-01".to_string(),
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 8000,
            timeout_secs: 120,
        }
    }
}

/// Where documents are written and where reference material is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pages_dir: PathBuf,
    pub components_dir: PathBuf,
    pub extension: String,
    /// Custom document template replacing the built-in one
    pub template: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("src/pages"),
            components_dir: PathBuf::from("src/components/ui"),
            extension: "mdx".to_string(),
            template: None,
        }
    }
}
