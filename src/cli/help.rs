//! CLI help text and command-name contract for logging.

use crate::cli::parse::{Commands, ServiceCommands};

/// Usage examples appended to the spawn command's help.
pub const SPAWN_EXAMPLES: &str = "\
Examples:
  sessionctl service spawn my-service
  sessionctl service spawn my-service/prod
  sessionctl service spawn my-service -e SOME_ENV_VAR=foo -e ANOTHER_ENV_VAR=bar
  sessionctl service spawn my-service -g 60
  sessionctl service spawn my-service -t latest
  sessionctl spawn my-service -l my-lock -r";

/// Command name string for log records (e.g. "service.spawn").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Service { command } => match command {
            ServiceCommands::Spawn(_) => "service.spawn",
        },
        Commands::Spawn(_) => "spawn",
    }
}
