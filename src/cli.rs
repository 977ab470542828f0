//! CLI domain: parse, route, help, output, and presentation only.
//! Spawn semantics live in `crate::spawn`; the network call lives in `crate::client`.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, SPAWN_EXAMPLES};
pub use output::map_error;
pub use parse::{parse_env_pair, Cli, Commands, ServiceCommands, SpawnArgs};
pub use presentation::{format_spawn_json, format_spawn_text};
pub use route::RunContext;
