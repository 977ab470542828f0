//! CLI parse: clap types for sessionctl. No behavior beyond flag value parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::help::SPAWN_EXAMPLES;
use crate::error::SpawnError;

/// sessionctl - spawn session backends on the orchestration API
#[derive(Parser, Debug)]
#[command(name = "sessionctl", version)]
#[command(about = "Spawn session backends on the orchestration API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Service commands
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },
    /// Spawn a session backend (alias for `service spawn`)
    Spawn(SpawnArgs),
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// Spawns a session backend with the provided service/environment's docker image
    Spawn(SpawnArgs),
}

#[derive(Args, Debug, Clone)]
#[command(after_help = SPAWN_EXAMPLES)]
pub struct SpawnArgs {
    /// Name of service/environment to spawn. (Providing the environment is optional if
    /// the service only has one environment, otherwise it is required)
    #[arg(value_name = "SERVICE[/ENVIRONMENT]")]
    pub service: String,

    /// Environment variable to pass to the backend (repeatable)
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// Grace period (in seconds) to wait after the last connection is closed before
    /// shutting down the backend (server default is 300)
    #[arg(short = 'g', long)]
    pub grace: Option<u64>,

    /// Port for the API to proxy requests to (server default is 8080)
    #[arg(short = 'p', long, hide = true, allow_negative_numbers = true)]
    pub port: Option<i64>,

    /// Image tag or digest for the service to spawn
    #[arg(short = 't', long)]
    pub tag: Option<String>,

    /// Require a bearer token to access the backend. A random token is generated and
    /// returned in the result
    #[arg(short = 'r', long)]
    pub require_bearer_token: bool,

    /// Lock to spawn the backend with; an existing backend holding the lock is
    /// returned instead of spawning a new one
    #[arg(short = 'l', long)]
    pub lock: Option<String>,

    /// Output format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,
}

/// Parse one `KEY=VALUE` occurrence of `--env`, splitting on the first `=`.
pub fn parse_env_pair(raw: &str) -> Result<(String, String), SpawnError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => {
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(SpawnError::InvalidEnvPair(raw.to_string())),
    }
}
