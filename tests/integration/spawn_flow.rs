//! End-to-end spawn flow through the run context with a recording client

use super::test_utils::{sample_response, RecordingClient};
use clap::Parser;
use sessionctl::cli::{Cli, RunContext};
use sessionctl::config::CliConfig;
use sessionctl::error::SpawnError;
use std::collections::BTreeMap;

fn context() -> RunContext {
    RunContext::from_config(CliConfig::default()).with_color(false)
}

#[tokio::test]
async fn test_spawn_with_environment_and_flags() {
    let cli = Cli::try_parse_from([
        "sessionctl",
        "service",
        "spawn",
        "my-service/prod",
        "-e",
        "FOO=bar",
        "-g",
        "60",
        "-t",
        "latest",
    ])
    .unwrap();
    let client = RecordingClient::new(sample_response());

    let output = context()
        .execute_with_client(&cli.command, &client)
        .await
        .unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    let request = &calls[0];
    assert_eq!(request.service, "my-service");
    assert_eq!(request.environment.as_deref(), Some("prod"));
    assert_eq!(
        request.env,
        Some(BTreeMap::from([("FOO".to_string(), "bar".to_string())]))
    );
    assert_eq!(request.grace_period_seconds, Some(60));
    assert_eq!(request.tag.as_deref(), Some("latest"));
    assert!(!request.require_bearer_token);

    let payload = serde_json::to_value(request).unwrap();
    assert!(payload.get("port").is_none());
    assert!(payload.get("lock").is_none());

    let expected = "\
Backend spawned!
backend name:   afqmz
backend status: Loading
backend url:    https://afqmz.example.net/
status url:     https://api.example.net/backend/afqmz/status
ready url:      https://afqmz.example.net/_plane_ready";
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_repeated_env_keys_last_wins() {
    let cli = Cli::try_parse_from([
        "sessionctl", "spawn", "svc", "-e", "A=1", "-e", "B=2", "-e", "A=3",
    ])
    .unwrap();
    let client = RecordingClient::new(sample_response());

    context()
        .execute_with_client(&cli.command, &client)
        .await
        .unwrap();

    let env = client.calls()[0].env.clone().unwrap();
    assert_eq!(env.len(), 2);
    assert_eq!(env["A"], "3");
    assert_eq!(env["B"], "2");
}

#[tokio::test]
async fn test_bearer_token_and_lock_lines() {
    let cli = Cli::try_parse_from(["sessionctl", "spawn", "svc", "-r", "-l", "room-1"]).unwrap();
    let mut response = sample_response();
    response.bearer_token = Some("tok_123".to_string());
    response.spawned = Some(true);
    let client = RecordingClient::new(response);

    let output = context()
        .execute_with_client(&cli.command, &client)
        .await
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[6], "bearer token:   tok_123");
    assert_eq!(lines[7], "spawned:        true");
    assert!(client.calls()[0].require_bearer_token);
}

#[tokio::test]
async fn test_invalid_identifiers_never_reach_client() {
    for raw in ["svc/", "/prod", "a/b/c"] {
        let cli = Cli::try_parse_from(["sessionctl", "spawn", raw]).unwrap();
        let client = RecordingClient::new(sample_response());

        let err = context()
            .execute_with_client(&cli.command, &client)
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            format!("Invalid service/environment name: {}", raw)
        );
        assert!(client.calls().is_empty());
    }
}

#[tokio::test]
async fn test_port_out_of_range_never_reaches_client() {
    let cli = Cli::try_parse_from(["sessionctl", "spawn", "my-service", "-p", "70000"]).unwrap();
    let client = RecordingClient::new(sample_response());

    let err = context()
        .execute_with_client(&cli.command, &client)
        .await
        .unwrap_err();

    assert!(matches!(err, SpawnError::InvalidPort(70000)));
    assert!(err.to_string().contains("70000"));
    assert!(err.to_string().contains("65535"));
    assert!(client.calls().is_empty());
}
