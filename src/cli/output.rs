//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SpawnError;

/// Map domain/service errors to the single line printed on failure.
/// Transport errors pass through unchanged.
pub fn map_error(e: &SpawnError) -> String {
    e.to_string()
}
