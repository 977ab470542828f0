//! Integration tests for command-line parsing of the spawn command

use clap::Parser;
use sessionctl::cli::{command_name, Cli, Commands, ServiceCommands, SpawnArgs};

fn spawn_args(cli: &Cli) -> &SpawnArgs {
    match &cli.command {
        Commands::Service {
            command: ServiceCommands::Spawn(args),
        }
        | Commands::Spawn(args) => args,
    }
}

#[test]
fn test_full_flag_set() {
    let cli = Cli::try_parse_from([
        "sessionctl",
        "service",
        "spawn",
        "my-service/prod",
        "-e",
        "SOME_ENV_VAR=foo",
        "--env",
        "ANOTHER_ENV_VAR=bar",
        "-g",
        "60",
        "-p",
        "8080",
        "-t",
        "latest",
        "-r",
        "-l",
        "room-1",
    ])
    .unwrap();

    assert_eq!(command_name(&cli.command), "service.spawn");
    let args = spawn_args(&cli);
    assert_eq!(args.service, "my-service/prod");
    assert_eq!(
        args.env,
        vec![
            ("SOME_ENV_VAR".to_string(), "foo".to_string()),
            ("ANOTHER_ENV_VAR".to_string(), "bar".to_string()),
        ]
    );
    assert_eq!(args.grace, Some(60));
    assert_eq!(args.port, Some(8080));
    assert_eq!(args.tag.as_deref(), Some("latest"));
    assert!(args.require_bearer_token);
    assert_eq!(args.lock.as_deref(), Some("room-1"));
    assert_eq!(args.format, "text");
}

#[test]
fn test_defaults_when_flags_absent() {
    let cli = Cli::try_parse_from(["sessionctl", "spawn", "svc"]).unwrap();
    assert_eq!(command_name(&cli.command), "spawn");
    let args = spawn_args(&cli);
    assert!(args.env.is_empty());
    assert_eq!(args.grace, None);
    assert_eq!(args.port, None);
    assert_eq!(args.tag, None);
    assert!(!args.require_bearer_token);
    assert_eq!(args.lock, None);
}

#[test]
fn test_out_of_range_ports_reach_validation() {
    for raw in ["70000", "0", "-1"] {
        let cli = Cli::try_parse_from(["sessionctl", "spawn", "svc", "--port", raw]).unwrap();
        assert_eq!(spawn_args(&cli).port, Some(raw.parse::<i64>().unwrap()));
    }
}

#[test]
fn test_malformed_env_flag_is_rejected() {
    assert!(Cli::try_parse_from(["sessionctl", "spawn", "svc", "-e", "NOEQUALS"]).is_err());
    assert!(Cli::try_parse_from(["sessionctl", "spawn", "svc", "-e", "=value"]).is_err());
}

#[test]
fn test_service_argument_is_required() {
    assert!(Cli::try_parse_from(["sessionctl", "spawn"]).is_err());
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["sessionctl", "spawn", "svc", "--format", "yaml"]).is_err());
}

#[test]
fn test_port_flag_is_hidden_from_help() {
    use clap::CommandFactory;
    let mut command = Cli::command();
    let spawn = command.find_subcommand_mut("spawn").unwrap();
    let help = spawn.render_help().to_string();
    assert!(!help.contains("--port"));
    assert!(help.contains("--require-bearer-token"));
    assert!(help.contains("--grace"));
}
