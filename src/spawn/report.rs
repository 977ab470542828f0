//! Spawn response and the report rendered from it.

use crate::spawn::options::SpawnOptions;
use serde::{Deserialize, Serialize};

/// Placeholder shown for a value the server did not report.
pub const MISSING_VALUE: &str = "-";

/// Backend details returned by the API after a spawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnResponse {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub url: String,
    pub status_url: String,
    pub ready_url: String,
    /// Only set when the spawn asked for a bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// Only set when the spawn carried a lock: `false` means an existing
    /// backend holding that lock was returned instead of a new one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawned: Option<bool>,
}

/// One `label: value` line of the spawn report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl ReportLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Assembles report lines. The five backend lines always come first; the bearer
/// token and spawned lines are appended independently, in that order.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    lines: Vec<ReportLine>,
}

impl ReportBuilder {
    pub fn new(response: &SpawnResponse) -> Self {
        let lines = vec![
            ReportLine::new("backend name", response.name.as_str()),
            ReportLine::new(
                "backend status",
                response.status.as_deref().unwrap_or(MISSING_VALUE),
            ),
            ReportLine::new("backend url", response.url.as_str()),
            ReportLine::new("status url", response.status_url.as_str()),
            ReportLine::new("ready url", response.ready_url.as_str()),
        ];
        Self { lines }
    }

    /// Append the bearer token line when a non-empty token was returned.
    pub fn bearer_token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.lines.push(ReportLine::new("bearer token", token));
        }
        self
    }

    /// Append the spawned line when a non-empty lock was supplied on input,
    /// whatever the response says about it.
    pub fn spawned(mut self, had_lock_input: bool, spawned: Option<bool>) -> Self {
        if had_lock_input {
            let value = spawned
                .map(|s| s.to_string())
                .unwrap_or_else(|| MISSING_VALUE.to_string());
            self.lines.push(ReportLine::new("spawned", value));
        }
        self
    }

    pub fn build(self) -> Vec<ReportLine> {
        self.lines
    }
}

/// Build the ordered report for a spawn response.
pub fn format_report(response: &SpawnResponse, options: &SpawnOptions) -> Vec<ReportLine> {
    ReportBuilder::new(response)
        .bearer_token(response.bearer_token.as_deref())
        .spawned(
            options.lock.as_deref().is_some_and(|lock| !lock.is_empty()),
            response.spawned,
        )
        .build()
}
