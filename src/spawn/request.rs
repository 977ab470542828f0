//! The payload handed to the API client.

use crate::spawn::identifier::ServiceIdentifier;
use crate::spawn::options::SpawnOptions;
use serde::Serialize;
use std::collections::BTreeMap;

/// A validated spawn request. Absent fields are left out when serialized so the
/// server applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpawnRequest {
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub require_bearer_token: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<String>,
}

/// Compose an identifier and options into a request.
///
/// `port` is the value returned by [`validate_port`](super::validate_port); the
/// raw `options.port` is not read.
pub fn build_request(
    identifier: ServiceIdentifier,
    options: SpawnOptions,
    port: Option<u16>,
) -> SpawnRequest {
    SpawnRequest {
        service: identifier.service,
        environment: identifier.environment,
        env: options.env,
        grace_period_seconds: options.grace_period_seconds,
        port,
        tag: options.tag,
        require_bearer_token: options.require_bearer_token,
        lock: options.lock,
    }
}
