//! Spawn Request Builder
//!
//! Turns raw CLI input into a validated spawn request and turns the API response
//! into the deterministic report shown to the operator. Nothing in this module
//! performs I/O: every failure it reports happens before the API client is called.

pub mod identifier;
pub mod options;
pub mod report;
pub mod request;

pub use identifier::{parse_identifier, ServiceIdentifier};
pub use options::{normalize_env, validate_port, SpawnOptions, MAX_PORT};
pub use report::{format_report, ReportBuilder, ReportLine, SpawnResponse};
pub use request::{build_request, SpawnRequest};

use crate::error::SpawnError;
use tracing::debug;

/// Parse the identifier, validate the options, and assemble the request.
///
/// Order matters: identifier errors win over port errors, and both are raised
/// before anything is handed to the network layer.
pub fn prepare(raw_identifier: &str, options: &SpawnOptions) -> Result<SpawnRequest, SpawnError> {
    let identifier = parse_identifier(raw_identifier)?;
    let port = validate_port(options.port)?;
    debug!(identifier = %identifier, port = ?port, "Spawn request prepared");
    Ok(build_request(identifier, options.clone(), port))
}
