//! CLI route: single route table and run context. Dispatches to the spawn builder,
//! the API client, and presentation.

use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::{Commands, ServiceCommands, SpawnArgs};
use crate::cli::presentation::{format_spawn_json, format_spawn_text};
use crate::client::{HttpSpawnClient, SpawnClient};
use crate::config::CliConfig;
use crate::error::SpawnError;
use crate::spawn::{self, format_report, normalize_env, SpawnOptions, SpawnRequest};

/// Runtime context for CLI execution: loaded configuration and output settings.
pub struct RunContext {
    config: CliConfig,
    color: bool,
}

impl RunContext {
    pub fn from_config(config: CliConfig) -> Self {
        Self {
            config,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Execute a CLI command against the configured HTTP API.
    ///
    /// Input is validated before the client is built, so a malformed argument is
    /// reported even when no credentials are configured.
    pub async fn execute(&self, command: &Commands) -> Result<String, SpawnError> {
        let args = spawn_args(command);
        let (request, options) = prepare_spawn(args)?;
        let client = HttpSpawnClient::from_config(&self.config.api)?;
        self.run_spawn(command, &client, request, &options, &args.format)
            .await
    }

    /// Execute a CLI command against the given client.
    pub async fn execute_with_client(
        &self,
        command: &Commands,
        client: &dyn SpawnClient,
    ) -> Result<String, SpawnError> {
        let args = spawn_args(command);
        let (request, options) = prepare_spawn(args)?;
        self.run_spawn(command, client, request, &options, &args.format)
            .await
    }

    async fn run_spawn(
        &self,
        command: &Commands,
        client: &dyn SpawnClient,
        request: SpawnRequest,
        options: &SpawnOptions,
        format: &str,
    ) -> Result<String, SpawnError> {
        info!(
            command = command_name(command),
            service = %request.service,
            "Spawning backend"
        );
        let response = client.spawn(&request).await?;
        debug!(backend = %response.name, "Spawn response received");

        if format == "json" {
            format_spawn_json(&response)
        } else {
            Ok(format_spawn_text(
                &format_report(&response, options),
                self.color,
            ))
        }
    }
}

fn spawn_args(command: &Commands) -> &SpawnArgs {
    match command {
        Commands::Service {
            command: ServiceCommands::Spawn(args),
        }
        | Commands::Spawn(args) => args,
    }
}

/// Options from flags, then the validated request. No I/O.
fn prepare_spawn(args: &SpawnArgs) -> Result<(SpawnRequest, SpawnOptions), SpawnError> {
    let options = SpawnOptions {
        env: normalize_env(&args.env),
        grace_period_seconds: args.grace,
        port: args.port,
        tag: args.tag.clone(),
        require_bearer_token: args.require_bearer_token,
        lock: args.lock.clone(),
    };
    let request = spawn::prepare(&args.service, &options)?;
    Ok((request, options))
}
