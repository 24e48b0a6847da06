//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use content_export::config::{load_config, load_config_from_env, DatabaseEngine, SslMode};
use secrecy::ExposeSecret;
use content_export::domain::ExporterError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for name in [
        "CONTENT_EXPORT_APPLICATION_LOG_LEVEL",
        "CONTENT_EXPORT_DATABASE_ENGINE",
        "CONTENT_EXPORT_DATABASE_HOST",
        "CONTENT_EXPORT_DATABASE_PORT",
        "CONTENT_EXPORT_DATABASE_USER",
        "CONTENT_EXPORT_DATABASE_PASSWORD",
        "CONTENT_EXPORT_DATABASE_DATABASE",
        "CONTENT_EXPORT_DATABASE_SSL_MODE",
        "CONTENT_EXPORT_DATABASE_CONNECT_TIMEOUT_SECONDS",
        "CONTENT_EXPORT_OUTPUT_PATH",
        "CONTENT_EXPORT_LOGGING_LOCAL_ENABLED",
        "CONTENT_EXPORT_LOGGING_LOCAL_PATH",
        "CONTENT_EXPORT_LOGGING_LOCAL_ROTATION",
        "TEST_DB_USER",
        "TEST_DB_PASSWORD",
    ] {
        std::env::remove_var(name);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[database]
engine = "postgresql"
host = "db.example.com"
port = 6543
user = "exporter"
password = "s3cret"
database = "coachbot"
ssl_mode = "require"
connect_timeout_seconds = 10

[output]
path = "/tmp/out/generated-content.json"

[logging]
local_enabled = true
local_path = "/tmp/content-export"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");

    assert_eq!(config.database.host, "db.example.com");
    assert_eq!(config.database.engine, DatabaseEngine::PostgreSql);
    assert_eq!(config.database.port(), 6543);
    assert_eq!(config.database.user, "exporter");
    assert!(config.database.password.is_some());
    assert_eq!(config.database.database, "coachbot");
    assert_eq!(config.database.ssl_mode, SslMode::Require);
    assert_eq!(config.database.connect_timeout_seconds, 10);

    assert_eq!(config.output.path, "/tmp/out/generated-content.json");

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/content-export");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[database]
user = "exporter"
database = "coachbot"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.engine, DatabaseEngine::MySql);
    assert_eq!(config.database.port, None);
    assert_eq!(config.database.port(), 3306);
    assert!(config.database.password.is_none());
    assert_eq!(config.database.ssl_mode, SslMode::Prefer);
    assert_eq!(config.database.connect_timeout_seconds, 30);
    assert_eq!(config.output.path, "generated-content.json");
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("TEST_DB_USER", "substituted_user");
    std::env::set_var("TEST_DB_PASSWORD", "substituted_password");

    let temp_file = write_config(
        r#"
[database]
user = "${TEST_DB_USER}"
password = "${TEST_DB_PASSWORD}"
database = "coachbot"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.database.user, "substituted_user");

    let password = config.database.password.expect("password should be set");
    let password: &str = password.expose_secret().as_ref();
    assert_eq!(password, "substituted_password");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[database]
user = "${TEST_DB_USER}"
password = "${TEST_DB_PASSWORD}"
database = "coachbot"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ExporterError::Configuration(_)));
    let message = err.to_string();
    assert!(message.contains("TEST_DB_USER"));
    assert!(message.contains("TEST_DB_PASSWORD"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CONTENT_EXPORT_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("CONTENT_EXPORT_DATABASE_HOST", "override.example.com");
    std::env::set_var("CONTENT_EXPORT_DATABASE_PORT", "15432");
    std::env::set_var("CONTENT_EXPORT_DATABASE_SSL_MODE", "disable");
    std::env::set_var("CONTENT_EXPORT_OUTPUT_PATH", "override.json");

    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[database]
host = "db.example.com"
user = "exporter"
database = "coachbot"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.database.host, "override.example.com");
    assert_eq!(config.database.port(), 15432);
    assert_eq!(config.database.ssl_mode, SslMode::Disable);
    assert_eq!(config.output.path, "override.json");

    cleanup_env_vars();
}

#[test]
fn test_invalid_port_override() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CONTENT_EXPORT_DATABASE_PORT", "not-a-port");

    let temp_file = write_config(
        r#"
[database]
user = "exporter"
database = "coachbot"
"#,
    );

    let result = load_config(temp_file.path());
    assert!(matches!(result, Err(ExporterError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_substituted_password_with_quotes_and_backslashes() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let raw = r#"p"a\s\n's${X}"#;
    std::env::set_var("TEST_DB_USER", "exporter");
    std::env::set_var("TEST_DB_PASSWORD", raw);

    let temp_file = write_config(
        r#"
[database]
user = "${TEST_DB_USER}"
password = "${TEST_DB_PASSWORD}"
database = "coachbot"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    let password = config.database.password.expect("password should be set");
    let password: &str = password.expose_secret().as_ref();
    assert_eq!(password.as_bytes(), raw.as_bytes());

    cleanup_env_vars();
}

#[test]
fn test_engine_override_changes_default_port() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CONTENT_EXPORT_DATABASE_ENGINE", "postgresql");

    let temp_file = write_config(
        r#"
[database]
user = "exporter"
database = "coachbot"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.database.engine, DatabaseEngine::PostgreSql);
    assert_eq!(config.database.port(), 5432);

    std::env::set_var("CONTENT_EXPORT_DATABASE_ENGINE", "oracle");
    let result = load_config(temp_file.path());
    assert!(matches!(result, Err(ExporterError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_invalid_timeout_override() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CONTENT_EXPORT_DATABASE_CONNECT_TIMEOUT_SECONDS", "30s");

    let temp_file = write_config(
        r#"
[database]
user = "exporter"
database = "coachbot"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ExporterError::Configuration(_)));
    assert!(err
        .to_string()
        .contains("CONTENT_EXPORT_DATABASE_CONNECT_TIMEOUT_SECONDS"));
    assert_eq!(err.exit_code(), 2);

    cleanup_env_vars();
}

#[test]
fn test_invalid_local_logging_override() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CONTENT_EXPORT_LOGGING_LOCAL_ENABLED", "yes");

    let temp_file = write_config(
        r#"
[database]
user = "exporter"
database = "coachbot"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ExporterError::Configuration(_)));
    assert!(err.to_string().contains("CONTENT_EXPORT_LOGGING_LOCAL_ENABLED"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_ssl_mode() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[database]
user = "exporter"
database = "coachbot"
ssl_mode = "verify-everything"
"#,
    );

    let result = load_config(temp_file.path());
    assert!(matches!(result, Err(ExporterError::Configuration(_))));
}

#[test]
fn test_validation_failure() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    // No database name
    let temp_file = write_config(
        r#"
[database]
user = "exporter"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("validation failed"));
}

#[test]
fn test_load_config_from_env() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    std::env::set_var("CONTENT_EXPORT_DATABASE_HOST", "env.example.com");
    std::env::set_var("CONTENT_EXPORT_DATABASE_USER", "env_user");
    std::env::set_var("CONTENT_EXPORT_DATABASE_PASSWORD", "env_password");
    std::env::set_var("CONTENT_EXPORT_DATABASE_DATABASE", "coachbot");

    let config = load_config_from_env().expect("Failed to build config from env");

    assert_eq!(config.database.host, "env.example.com");
    assert_eq!(config.database.user, "env_user");
    assert_eq!(config.database.database, "coachbot");
    assert!(config.database.password.is_some());
    assert_eq!(config.output.path, "generated-content.json");
    assert_eq!(
        config.database.endpoint_safe(),
        "env_user@env.example.com:3306/coachbot"
    );

    cleanup_env_vars();
}

#[test]
fn test_load_config_from_env_requires_credentials() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let result = load_config_from_env();
    assert!(matches!(result, Err(ExporterError::Configuration(_))));
}
