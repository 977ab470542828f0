//! Runtime options for a spawn, plus the checks applied to them.

use crate::error::SpawnError;
use std::collections::BTreeMap;

/// Highest port the API accepts.
pub const MAX_PORT: i64 = u16::MAX as i64;

/// Optional parameters collected from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnOptions {
    pub env: Option<BTreeMap<String, String>>,
    pub grace_period_seconds: Option<u64>,
    pub port: Option<i64>,
    pub tag: Option<String>,
    pub require_bearer_token: bool,
    pub lock: Option<String>,
}

/// Check that a port, if given, lies in `1..=MAX_PORT` and return it as a `u16`.
///
/// An absent port is accepted; the server picks its own default.
pub fn validate_port(port: Option<i64>) -> Result<Option<u16>, SpawnError> {
    match port {
        None => Ok(None),
        Some(p) if (1..=MAX_PORT).contains(&p) => u16::try_from(p)
            .map(Some)
            .map_err(|_| SpawnError::InvalidPort(p)),
        Some(p) => Err(SpawnError::InvalidPort(p)),
    }
}

/// Collapse repeated `KEY=VALUE` occurrences into a map.
///
/// Pairs are folded in the order given, so a later value for a key replaces an
/// earlier one. Returns `None` for an empty sequence so the field is left out of
/// the request.
pub fn normalize_env(pairs: &[(String, String)]) -> Option<BTreeMap<String, String>> {
    if pairs.is_empty() {
        return None;
    }
    let env = pairs
        .iter()
        .fold(BTreeMap::new(), |mut env, (key, value)| {
            env.insert(key.clone(), value.clone());
            env
        });
    Some(env)
}
