//! Configuration management for IntelliSQL.
//!
//! Handles loading configuration from a TOML file and environment variables.
//! The resolved [`Config`] is built once at startup and handed to the
//! translator and executor constructors; nothing reads globals afterwards.

use crate::error::{IntelliSqlError, Result};
use crate::llm::LlmProvider;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "data.db";

/// Main configuration structure for IntelliSQL.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Language model settings.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Target database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Language model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider: "gemini", "openai", "ollama" or "mock".
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model name. Falls back to the provider's env var, then its default.
    #[serde(default)]
    pub model: Option<String>,

    /// Request timeout in seconds. Unset means the call may block indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Base URL override (Ollama only).
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key. Never read from the config file, only from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_provider() -> String {
    LlmProvider::default().as_str().to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: None,
            timeout_secs: None,
            base_url: None,
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// Parses the configured provider name.
    pub fn provider(&self) -> Result<LlmProvider> {
        self.provider.parse().map_err(IntelliSqlError::config)
    }

    /// Returns the model to request, falling back to the provider default.
    pub fn model_or_default(&self, provider: LlmProvider) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| provider.default_model().to_string())
    }

    /// Fills unset fields from provider-specific environment variables.
    ///
    /// Reads the API key (`GOOGLE_API_KEY`, `OPENAI_API_KEY`), the model
    /// (`GEMINI_MODEL`, `OPENAI_MODEL`, `OLLAMA_MODEL`) and `OLLAMA_HOST`.
    /// An unknown provider is left alone; the factory reports it.
    pub fn apply_env_defaults(&mut self) {
        let Ok(provider) = self.provider() else {
            return;
        };

        if self.api_key.is_none() {
            if let Some(var) = provider.api_key_env() {
                self.api_key = std::env::var(var).ok().filter(|k| !k.trim().is_empty());
            }
        }
        if self.model.is_none() {
            if let Some(var) = provider.model_env() {
                self.model = std::env::var(var).ok();
            }
        }
        if self.base_url.is_none() && provider == LlmProvider::Ollama {
            self.base_url = std::env::var("OLLAMA_HOST").ok();
        }
    }
}

/// Target database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file. Created on first use if absent.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl DatabaseConfig {
    /// Creates a config targeting the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("intellisql")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| IntelliSqlError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            IntelliSqlError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }
}
