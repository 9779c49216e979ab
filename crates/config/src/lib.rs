//! Configuration loading, validation, and management for Roamer.
//!
//! Loads configuration from `~/.roamer/config.toml` (or an explicit path) with
//! environment variable overrides. Validates all settings at startup.

use roamer_core::Category;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.roamer/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the augmenter (never written back out)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Directory that source paths are resolved against
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// How many interactions a session remembers
    #[serde(default = "default_memory_size")]
    pub memory_size: usize,

    /// Data sources, loaded in this order
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,

    /// Text augmentation settings
    #[serde(default)]
    pub augmenter: AugmenterConfig,
}

fn default_data_dir() -> String {
    ".".into()
}
fn default_memory_size() -> usize {
    5
}
fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new("tax", "data/state_taxes.csv"),
        SourceConfig::new("tourist", "data/tourist_info.csv"),
        SourceConfig::new("cost", "data/travel_costs.csv"),
    ]
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("data_dir", &self.data_dir)
            .field("memory_size", &self.memory_size)
            .field("sources", &self.sources)
            .field("augmenter", &self.augmenter)
            .finish()
    }
}

/// One data file and the category its rows belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Category tag ("tax", "tourist", "cost", or any other tag)
    pub category: String,

    /// Path relative to `data_dir`
    pub path: String,
}

impl SourceConfig {
    pub fn new(category: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            path: path.into(),
        }
    }

    pub fn category(&self) -> Category {
        Category::from(self.category.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugmenterConfig {
    /// Set to false to always answer with the raw facts
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Endpoint override; well-known providers have a built-in default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Upper bound on a single augmentation call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}
fn default_provider() -> String {
    "openai".into()
}
fn default_model() -> String {
    "gpt-3.5-turbo".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for AugmenterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: default_provider(),
            model: default_model(),
            api_url: None,
            temperature: default_temperature(),
            max_tokens: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from the default location
    /// (`~/.roamer/config.toml`) when no path is given.
    ///
    /// Environment variables then override file settings:
    /// - `ROAMER_API_KEY` (highest priority), then `OPENAI_API_KEY`
    /// - `ROAMER_MODEL`
    /// - `ROAMER_DATA_DIR`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_dir().join("config.toml"),
        };
        let mut config = Self::load_from(&config_path)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let from_env = lookup("ROAMER_API_KEY")
            .or_else(|| lookup("OPENAI_API_KEY"))
            .filter(|k| !k.is_empty());
        if from_env.is_some() {
            self.api_key = from_env;
        }

        if let Some(model) = lookup("ROAMER_MODEL") {
            self.augmenter.model = model;
        }

        if let Some(dir) = lookup("ROAMER_DATA_DIR") {
            self.data_dir = dir;
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".roamer")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size == 0 {
            return Err(ConfigError::ValidationError(
                "memory_size must be at least 1".into(),
            ));
        }

        if self.sources.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one source must be configured".into(),
            ));
        }

        if self.augmenter.temperature < 0.0 || self.augmenter.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "augmenter.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.augmenter.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "augmenter.timeout_secs must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Whether answers can be augmented: enabled and a key is available.
    pub fn augmentation_available(&self) -> bool {
        self.augmenter.enabled && self.api_key.is_some()
    }

    /// Render the configuration as TOML (the API key is never included).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            data_dir: default_data_dir(),
            memory_size: default_memory_size(),
            sources: default_sources(),
            augmenter: AugmenterConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
