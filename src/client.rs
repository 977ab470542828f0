//! Orchestration API Client
//!
//! The spawn command talks to the remote API only through [`SpawnClient`]. The HTTP
//! implementation performs exactly one request per call; it never retries, and any
//! failure is handed back to the caller as-is.

use crate::config::ApiConfig;
use crate::error::SpawnError;
use crate::spawn::{SpawnRequest, SpawnResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info};

/// Performs a spawn against the orchestration API.
#[async_trait]
pub trait SpawnClient: Send + Sync {
    async fn spawn(&self, request: &SpawnRequest) -> Result<SpawnResponse, SpawnError>;
}

/// Wire body for the spawn endpoint. The service travels in the URL path.
#[derive(Serialize)]
struct SpawnBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    environment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<&'a BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grace_period_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    require_bearer_token: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    lock: Option<&'a str>,
}

impl<'a> From<&'a SpawnRequest> for SpawnBody<'a> {
    fn from(request: &'a SpawnRequest) -> Self {
        Self {
            environment: request.environment.as_deref(),
            env: request.env.as_ref(),
            grace_period_seconds: request.grace_period_seconds,
            port: request.port,
            tag: request.tag.as_deref(),
            require_bearer_token: request.require_bearer_token,
            lock: request.lock.as_deref(),
        }
    }
}

fn map_http_error(error: reqwest::Error) -> SpawnError {
    if error.is_timeout() {
        SpawnError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        SpawnError::Transport(format!("Connection error: {}", error))
    } else {
        SpawnError::Transport(format!("HTTP error: {}", error))
    }
}

fn map_status_error(status: StatusCode, body: String) -> SpawnError {
    let message = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body
    };
    match status.as_u16() {
        401 | 403 => SpawnError::Unauthorized(message),
        404 => SpawnError::NotFound(message),
        code => SpawnError::RequestFailed {
            status: code,
            message,
        },
    }
}

/// HTTP client for the spawn endpoint.
pub struct HttpSpawnClient {
    client: Client,
    base_url: Url,
    account: String,
    token: String,
}

impl HttpSpawnClient {
    pub fn new(
        base_url: String,
        account: String,
        token: String,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, SpawnError> {
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| SpawnError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(&base_url)
            .map_err(|e| SpawnError::ConfigError(format!("Invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SpawnError::ConfigError(format!(
                "Invalid base URL {}: cannot carry a path",
                base_url
            )));
        }
        if is_dot_segment(&account) {
            return Err(SpawnError::ConfigError(format!(
                "Invalid account name: {}",
                account
            )));
        }

        Ok(Self {
            client,
            base_url,
            account,
            token,
        })
    }

    /// Build a client from the `[api]` configuration section. Fails when no
    /// account or token is configured.
    pub fn from_config(api: &ApiConfig) -> Result<Self, SpawnError> {
        let (account, token) = api.credentials()?;
        Self::new(
            api.base_url.clone(),
            account.to_string(),
            token.to_string(),
            Duration::from_secs(api.connect_timeout_secs),
            Duration::from_secs(api.request_timeout_secs),
        )
    }

    /// Endpoint for spawning `service`. Account and service are pushed as
    /// single percent-encoded path segments, so `?`, `#` or `/` in either can
    /// never change which endpoint is addressed.
    pub fn spawn_url(&self, service: &str) -> Result<Url, SpawnError> {
        if is_dot_segment(service) {
            return Err(SpawnError::InvalidIdentifier(service.to_string()));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SpawnError::ConfigError(format!("Invalid base URL {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["v1", "user"])
            .push(&self.account)
            .push("service")
            .push(service)
            .push("spawn");
        Ok(url)
    }
}

/// `.` and `..` would be resolved away as path segments instead of being sent.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

#[async_trait]
impl SpawnClient for HttpSpawnClient {
    async fn spawn(&self, request: &SpawnRequest) -> Result<SpawnResponse, SpawnError> {
        let url = self.spawn_url(&request.service)?;
        debug!(url = %url, "Sending spawn request");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&SpawnBody::from(request))
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, body));
        }

        let spawned: SpawnResponse = response
            .json()
            .await
            .map_err(|e| SpawnError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        info!(backend = %spawned.name, "Backend spawned");
        Ok(spawned)
    }
}

// Mock client for testing
#[cfg(test)]
pub struct MockSpawnClient {
    result: std::sync::Mutex<Option<Result<SpawnResponse, SpawnError>>>,
    calls: std::sync::Mutex<Vec<SpawnRequest>>,
}

#[cfg(test)]
impl MockSpawnClient {
    pub fn returning(result: Result<SpawnResponse, SpawnError>) -> Self {
        Self {
            result: std::sync::Mutex::new(Some(result)),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SpawnRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl SpawnClient for MockSpawnClient {
    async fn spawn(&self, request: &SpawnRequest) -> Result<SpawnResponse, SpawnError> {
        self.calls.lock().unwrap().push(request.clone());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(SpawnError::Transport("mock exhausted".to_string())))
    }
}
