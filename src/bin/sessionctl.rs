//! Sessionctl CLI Binary
//!
//! Command-line interface for spawning session backends.

use clap::Parser;
use sessionctl::cli::{Cli, RunContext};
use sessionctl::config::{CliConfig, ConfigLoader};
use sessionctl::error::SpawnError;
use sessionctl::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Load configuration once; logging comes up before a load error is reported
    let loaded = load_config(&cli);
    let file_logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    let logging_config = build_logging_config(&cli, file_logging);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("sessionctl starting");

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", sessionctl::cli::map_error(&e));
            process::exit(1);
        }
    };

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    let context = RunContext::from_config(config).with_color(color);

    match context.execute(&cli.command).await {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", sessionctl::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load configuration from `--config` when given, otherwise from the global file.
fn load_config(cli: &Cli) -> Result<CliConfig, SpawnError> {
    match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(),
    }
}

/// Apply logging flags on top of the `[logging]` section.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
