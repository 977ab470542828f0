//! Integration tests for the configuration system

use sessionctl::config::ConfigLoader;
use sessionctl::error::SpawnError;
use std::sync::Mutex;
use tempfile::TempDir;

// Mutex to serialize SESSIONCTL_* environment variable access in tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_config_file_overrides_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[api]
base_url = "http://localhost:9090"
account = "acme"
token = "secret"
request_timeout_secs = 15

[logging]
level = "info"
format = "json"
"#,
    );

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9090");
    assert_eq!(config.api.account.as_deref(), Some("acme"));
    assert_eq!(config.api.token.as_deref(), Some("secret"));
    assert_eq!(config.api.request_timeout_secs, 15);
    assert_eq!(config.api.connect_timeout_secs, 10, "default kept");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.output, "stderr", "default kept");
}

#[test]
fn test_empty_config_file_yields_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "");

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, "https://api.jamsocket.com");
    assert!(config.api.token.is_none());
    assert_eq!(config.logging.level, "off");
}

#[test]
fn test_environment_overrides_file() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[api]
account = "acme"
token = "from-file"
"#,
    );

    std::env::set_var("SESSIONCTL_API__TOKEN", "from-env");
    let result = ConfigLoader::load_from_file(&path);
    std::env::remove_var("SESSIONCTL_API__TOKEN");

    let config = result.unwrap();
    assert_eq!(config.api.token.as_deref(), Some("from-env"));
    assert_eq!(config.api.account.as_deref(), Some("acme"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[api]
base_url = "api.example.net"
"#,
    );

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SpawnError::ConfigError(_)));
    assert!(err.to_string().contains("base_url"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SpawnError::ConfigError(_)));
}
