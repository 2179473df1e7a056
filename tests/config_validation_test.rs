use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use item_catalog::config::{AppConfig, LogFormat, ObserverKind, ServerConfig, TelemetrySection};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Every test that reads the process environment holds this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn defaults_match_service_contract() {
    let config = AppConfig::default();

    assert_eq!(config.bind_address(), "0.0.0.0:8000");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(!config.telemetry.enabled);
    assert_eq!(config.telemetry.endpoint, "http://localhost:4317");
    assert_eq!(config.telemetry.service_name, "small-fastapi-template");
    assert_eq!(config.telemetry.environment, "dev");
    assert_eq!(config.instrumentation.observer, ObserverKind::Tracing);
    assert!(config.validate().is_ok());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let _env = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(Some(&dir.path().join("absent.toml")))
        .expect("missing config file should not be an error");
    assert_eq!(config.server.port, 8000);
}

#[test]
fn file_overrides_sections() {
    let _env = env_lock();
    let file = write_config(
        r#"
[server]
port = 9000

[logging]
level = ""
format = "json"

[telemetry]
enabled = true
environment = "staging"

[instrumentation]
observer = "none"
"#,
    );

    let config = AppConfig::load_from(Some(file.path())).expect("config should load");

    assert_eq!(config.bind_address(), "0.0.0.0:9000");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.telemetry.enabled);
    assert_eq!(config.telemetry.environment, "staging");
    assert_eq!(config.telemetry.endpoint, "http://localhost:4317");
    assert_eq!(config.instrumentation.observer, ObserverKind::None);
}

#[test]
fn unknown_observer_is_rejected() {
    let _env = env_lock();
    let file = write_config("[instrumentation]\nobserver = \"stdout\"\n");
    assert!(AppConfig::load_from(Some(file.path())).is_err());
}

#[test]
fn zero_port_fails_validation() {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn enabled_telemetry_requires_endpoint() {
    let config = AppConfig {
        telemetry: TelemetrySection {
            enabled: true,
            endpoint: "  ".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let disabled = AppConfig {
        telemetry: TelemetrySection {
            enabled: false,
            endpoint: String::new(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(disabled.validate().is_ok());
}

#[test]
fn environment_overrides_nested_keys() {
    let _env = env_lock();
    std::env::set_var("ITEM_CATALOG_SERVER__PORT", "9100");
    std::env::set_var("ITEM_CATALOG_TELEMETRY__SERVICE_NAME", "catalog-under-test");

    let loaded = AppConfig::load_from(None);

    std::env::remove_var("ITEM_CATALOG_SERVER__PORT");
    std::env::remove_var("ITEM_CATALOG_TELEMETRY__SERVICE_NAME");

    let config = loaded.expect("environment overrides should load");
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.telemetry.service_name, "catalog-under-test");
    assert_eq!(config.telemetry.endpoint, "http://localhost:4317");
}
