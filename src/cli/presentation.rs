//! CLI presentation: text and json formatters for the spawn result.

use crate::error::SpawnError;
use crate::spawn::{ReportLine, SpawnResponse};
use owo_colors::OwoColorize;

const HEADER: &str = "Backend spawned!";
const LABEL_WIDTH: usize = 15;

/// Render the report lines under the spawn header, one `label: value` per line.
pub fn format_spawn_text(lines: &[ReportLine], color: bool) -> String {
    let mut output = if color {
        HEADER.bright_blue().to_string()
    } else {
        HEADER.to_string()
    };

    for line in lines {
        let label = format!("{:<width$}", format!("{}:", line.label), width = LABEL_WIDTH);
        output.push('\n');
        if color {
            output.push_str(&format!("{} {}", label.bold(), line.value.blue()));
        } else {
            output.push_str(&format!("{} {}", label, line.value));
        }
    }
    output
}

pub fn format_spawn_json(response: &SpawnResponse) -> Result<String, SpawnError> {
    serde_json::to_string_pretty(response)
        .map_err(|e| SpawnError::InvalidResponse(format!("Failed to encode response: {}", e)))
}
