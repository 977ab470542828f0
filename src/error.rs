//! Error types for the session backend spawn client.

use thiserror::Error;

/// Errors raised while preparing or performing a spawn.
///
/// Validation variants are raised before any network I/O; everything else comes
/// from the API client or from configuration loading.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("Invalid service/environment name: {0}")]
    InvalidIdentifier(String),

    #[error("Error parsing port. Must be an integer >= 1 and <= 65535. Received for --port: {0}")]
    InvalidPort(i64),

    #[error("Invalid environment variable (expected KEY=VALUE): {0}")]
    InvalidEnvPair(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SpawnError {
    /// True for errors detected locally, before the API client is called.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SpawnError::InvalidIdentifier(_)
                | SpawnError::InvalidPort(_)
                | SpawnError::InvalidEnvPair(_)
        )
    }
}

impl From<config::ConfigError> for SpawnError {
    fn from(err: config::ConfigError) -> Self {
        SpawnError::ConfigError(err.to_string())
    }
}
