//! Configuration loading and management
//!
//! The dashboard has one process-wide configuration: where the orchestrator
//! lives, the optional bearer token, and where to listen. It is resolved once
//! at startup (YAML file, then environment overrides), validated, and shared
//! as `Arc<DashboardConfig>` with every collaborator.

use crate::core::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of an optional YAML config file
pub const ENV_CONFIG_FILE: &str = "RCM_CONFIG";
pub const ENV_BACKEND_URL: &str = "BACKEND_API_URL";
pub const ENV_API_TOKEN: &str = "API_TOKEN";
pub const ENV_BIND_ADDR: &str = "RCM_BIND_ADDR";
pub const ENV_REQUEST_TIMEOUT: &str = "RCM_REQUEST_TIMEOUT_SECS";

/// Process-wide dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the orchestrator (e.g. `http://orchestrator:9000`)
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Bearer token sent to the orchestrator, if any
    #[serde(default)]
    pub api_token: Option<String>,

    /// Address the dashboard server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Timeout applied to every orchestrator request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://orchestrator:9000".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            api_token: None,
            bind_addr: default_bind_addr(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment)
    ///
    /// An empty `API_TOKEN` clears the token.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            self.backend_url = url;
        }
        if let Some(token) = lookup(ENV_API_TOKEN) {
            self.api_token = Some(token).filter(|t| !t.is_empty());
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            self.bind_addr = addr;
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT) {
            self.request_timeout_secs =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        field: "request_timeout_secs".to_string(),
                        value: raw.clone(),
                        message: "must be a whole number of seconds".to_string(),
                    })?;
        }
        Ok(self)
    }

    /// Resolve the configuration for this process
    ///
    /// Reads `RCM_CONFIG` if set, applies environment overrides, validates.
    pub fn load() -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok();

        let base = match lookup(ENV_CONFIG_FILE) {
            Some(path) => Self::from_yaml_file(&path)?,
            None => Self::default(),
        };
        let config = base.with_env_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "backend_url".to_string(),
            });
        }
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "backend_url".to_string(),
                value: self.backend_url.clone(),
                message: "must start with http:// or https://".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                value: "0".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Full orchestrator URL for a path such as `/claims`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
