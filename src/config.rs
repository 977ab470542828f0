//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file (or an
//! explicit `--config` file), then `SESSIONCTL_*` environment variables.

use crate::error::SpawnError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::global_config_path;
pub(crate) use paths::default_log_file_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Orchestration API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Orchestration API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Account the services belong to
    #[serde(default)]
    pub account: Option<String>,

    /// Bearer token used to authenticate against the API
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

pub(crate) fn default_base_url() -> String {
    "https://api.jamsocket.com".to_string()
}

pub(crate) fn default_connect_timeout_secs() -> u64 {
    10
}

pub(crate) fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            account: None,
            token: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Validate API settings
    pub fn validate(&self) -> Result<(), String> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err("base_url cannot be empty".to_string());
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!(
                "base_url must start with http:// or https:// (got {})",
                base_url
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Account and token for authenticated calls.
    pub fn credentials(&self) -> Result<(&str, &str), SpawnError> {
        let account = non_empty(self.account.as_deref()).ok_or_else(|| {
            SpawnError::ConfigError(
                "No account configured. Set api.account or SESSIONCTL_API__ACCOUNT".to_string(),
            )
        })?;
        let token = non_empty(self.token.as_deref()).ok_or_else(|| {
            SpawnError::ConfigError(
                "No API token configured. Set api.token or SESSIONCTL_API__TOKEN".to_string(),
            )
        })?;
        Ok((account, token))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl CliConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), SpawnError> {
        self.api
            .validate()
            .map_err(|e| SpawnError::ConfigError(format!("api: {}", e)))
    }
}
