//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (RUNBOOKS_*)
//! 2. TOML config file (if RUNBOOKS_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (RUNBOOKS_*)
/// 2. TOML config file (if RUNBOOKS_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog page listing every runbook.
    ///
    /// Set via RUNBOOKS_INDEX_URL environment variable.
    #[serde(default = "default_index_url")]
    pub index_url: String,

    /// Path segment every runbook link contains.
    ///
    /// Set via RUNBOOKS_CATALOG_PATH environment variable.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via RUNBOOKS_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via RUNBOOKS_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum bytes to fetch per page.
    ///
    /// Set via RUNBOOKS_MAX_BYTES environment variable.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Text length a content container must exceed to be accepted.
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,

    /// Length of the description excerpt.
    #[serde(default = "default_description_chars")]
    pub description_chars: usize,
}

fn default_index_url() -> String {
    "https://containersolutions.github.io/runbooks/posts/kubernetes/".into()
}

fn default_catalog_path() -> String {
    "/posts/kubernetes/".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; MCP-KubernetesRunbooks/1.0)".into()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_max_bytes() -> usize {
    5_242_880 // 5MB
}

fn default_min_content_chars() -> usize {
    100
}

fn default_description_chars() -> usize {
    200
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            catalog_path: default_catalog_path(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_bytes: default_max_bytes(),
            min_content_chars: default_min_content_chars(),
            description_chars: default_description_chars(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `RUNBOOKS_`
    /// 2. TOML file from `RUNBOOKS_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("RUNBOOKS_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("RUNBOOKS_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
