//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DatabaseEngine, ExporterConfig, SslMode};
use super::secret::secret_string;
use crate::domain::errors::ExporterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of every environment variable override
pub const ENV_PREFIX: &str = "CONTENT_EXPORT_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads and parses the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax) in string values
/// 3. Deserializes the document into ExporterConfig
/// 4. Applies environment variable overrides (CONTENT_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use content_export::config::loader::load_config;
///
/// let config = load_config("content-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExporterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExporterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut document: toml::Value = toml::from_str(&contents)
        .map_err(|e| ExporterError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    substitute_env_vars(&mut document)?;

    let mut config: ExporterConfig = document
        .try_into()
        .map_err(|e| ExporterError::Configuration(format!("Invalid configuration: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Builds configuration from defaults and CONTENT_EXPORT_* variables only
///
/// Used when no configuration file is present, e.g.
/// `CONTENT_EXPORT_DATABASE_HOST`, `CONTENT_EXPORT_DATABASE_USER`,
/// `CONTENT_EXPORT_DATABASE_PASSWORD`, `CONTENT_EXPORT_DATABASE_DATABASE`.
///
/// # Errors
///
/// Returns an error if an override cannot be parsed or the resulting
/// configuration does not validate.
pub fn load_config_from_env() -> Result<ExporterConfig> {
    let mut config = ExporterConfig::default();

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExporterError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Substitution happens on the string values of the parsed document, so a
/// value is used byte for byte and never read as TOML. All missing variables
/// are reported at once.
fn substitute_env_vars(document: &mut toml::Value) -> Result<()> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExporterError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut missing_vars: Vec<String> = Vec::new();

    substitute_in_value(document, &re, &mut missing_vars);

    if !missing_vars.is_empty() {
        return Err(ExporterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(())
}

fn substitute_in_value(value: &mut toml::Value, re: &Regex, missing_vars: &mut Vec<String>) {
    match value {
        toml::Value::String(text) => {
            if re.is_match(text) {
                *text = substitute_in_str(text, re, missing_vars);
            }
        }
        toml::Value::Array(items) => {
            for item in items {
                substitute_in_value(item, re, missing_vars);
            }
        }
        toml::Value::Table(table) => {
            for (_, item) in table.iter_mut() {
                substitute_in_value(item, re, missing_vars);
            }
        }
        _ => {}
    }
}

fn substitute_in_str(text: &str, re: &Regex, missing_vars: &mut Vec<String>) -> String {
    re.replace_all(text, |caps: &regex::Captures<'_>| {
        let var_name = &caps[1];
        match std::env::var(var_name) {
            Ok(value) => value,
            Err(_) => {
                if !missing_vars.iter().any(|v| v == var_name) {
                    missing_vars.push(var_name.to_string());
                }
                caps[0].to_string()
            }
        }
    })
    .into_owned()
}

/// Parse an override value, naming the variable on failure
fn parse_override<T: std::str::FromStr>(name: &str, val: &str, expected: &str) -> Result<T> {
    val.parse().map_err(|_| {
        ExporterError::Configuration(format!(
            "{ENV_PREFIX}{name} must be {expected}, got '{val}'"
        ))
    })
}

/// Reads `CONTENT_EXPORT_<name>`
fn env_override(name: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{name}")).ok()
}

/// Applies environment variable overrides using CONTENT_EXPORT_* prefix
///
/// Environment variables follow the pattern: CONTENT_EXPORT_<SECTION>_<KEY>
/// For example: CONTENT_EXPORT_DATABASE_HOST, CONTENT_EXPORT_OUTPUT_PATH
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Database overrides
    if let Some(val) = env_override("DATABASE_ENGINE") {
        config.database.engine = val
            .parse::<DatabaseEngine>()
            .map_err(ExporterError::Configuration)?;
    }
    if let Some(val) = env_override("DATABASE_HOST") {
        config.database.host = val;
    }
    if let Some(val) = env_override("DATABASE_PORT") {
        config.database.port = Some(parse_override("DATABASE_PORT", &val, "a port number")?);
    }
    if let Some(val) = env_override("DATABASE_USER") {
        config.database.user = val;
    }
    if let Some(val) = env_override("DATABASE_PASSWORD") {
        config.database.password = Some(secret_string(val));
    }
    if let Some(val) = env_override("DATABASE_DATABASE") {
        config.database.database = val;
    }
    if let Some(val) = env_override("DATABASE_SSL_MODE") {
        config.database.ssl_mode = val
            .parse::<SslMode>()
            .map_err(ExporterError::Configuration)?;
    }
    if let Some(val) = env_override("DATABASE_CONNECT_TIMEOUT_SECONDS") {
        config.database.connect_timeout_seconds =
            parse_override("DATABASE_CONNECT_TIMEOUT_SECONDS", &val, "a number of seconds")?;
    }

    // Output overrides
    if let Some(val) = env_override("OUTPUT_PATH") {
        config.output.path = val;
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled =
            parse_override("LOGGING_LOCAL_ENABLED", &val, "true or false")?;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
