//! Configuration management for Orrery
//!
//! Configuration is loaded from `~/.orrery/config.json` with environment
//! variable overrides. A `.env` file in the working directory is honored
//! (loaded by the CLI at startup via `dotenvy`), so `OPENAI_API_KEY` can
//! live there instead of the config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model-provider settings
    pub provider: ProviderConfig,
    /// Agent defaults
    pub agent: AgentDefaults,
}

/// Model-provider settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API credential. Usually supplied via `OPENAI_API_KEY` instead.
    pub api_key: Option<String>,
    /// Base URL override for OpenAI-compatible gateways.
    pub api_base: Option<String>,
}

/// Agent defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDefaults {
    /// Model identifier
    pub model: String,
    /// Sampling temperature (kept at 0 for deterministic replies)
    pub temperature: f32,
    /// Iteration guard for the automated ask loop
    pub max_steps: usize,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.0,
            max_steps: 10,
        }
    }
}

impl Config {
    /// Returns the Orrery configuration directory path (~/.orrery)
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".orrery")
    }

    /// Returns the path to the config file (~/.orrery/config.json)
    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load configuration from the default path with environment overrides.
    ///
    /// If the config file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::path())
    }

    /// Load configuration from a specific path with environment overrides.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ORRERY_MODEL") {
            self.agent.model = val;
        }
        if let Ok(val) = std::env::var("ORRERY_TEMPERATURE") {
            if let Ok(v) = val.parse() {
                self.agent.temperature = v;
            }
        }
        if let Ok(val) = std::env::var("ORRERY_MAX_STEPS") {
            if let Ok(v) = val.parse() {
                self.agent.max_steps = v;
            }
        }
        if let Ok(val) = std::env::var("ORRERY_API_BASE") {
            self.provider.api_base = Some(val);
        }
        if let Ok(val) = std::env::var("ORRERY_API_KEY") {
            self.provider.api_key = Some(val);
        }
        // Conventional variable name, checked after the ORRERY_-prefixed one
        if self.provider.api_key.is_none() {
            if let Ok(val) = std::env::var("OPENAI_API_KEY") {
                self.provider.api_key = Some(val);
            }
        }
    }

    /// The resolved API credential.
    ///
    /// # Errors
    /// Returns a config error when no credential is available.
    pub fn api_key(&self) -> Result<&str> {
        self.provider.api_key.as_deref().ok_or_else(|| {
            OrreryError::Config(
                "no API key configured; set OPENAI_API_KEY (a .env file works) or add \
                 provider.api_key to the config file"
                    .to_string(),
            )
        })
    }
}
