//! MySQL client implementation
//!
//! A single connection, opened once and held until the client is dropped.
//! Queries take the connection through a mutex, so the client can sit behind
//! the shared [`ContentSource`](crate::adapters::database::ContentSource) seam.

use crate::config::{DatabaseConfig, SslMode};
use crate::domain::{DatabaseError, Result};
use secrecy::ExposeSecret;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow, MySqlSslMode};
use sqlx::ConnectOptions;
use std::time::Duration;
use tokio::sync::Mutex;

/// SQLSTATE sent with "Access denied for user" (error 1045)
const ACCESS_DENIED_SQLSTATE: &str = "28000";

/// MySQL client
pub struct MySQLClient {
    connection: Mutex<MySqlConnection>,
    endpoint: String,
}

impl MySQLClient {
    /// Connect to MySQL
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::AuthenticationFailed` when the server rejects
    /// the credentials and `DatabaseError::ConnectionFailed` for anything else
    /// that prevents the session from starting, including the connect timeout.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = build_connect_options(config);
        let endpoint = config.endpoint_safe();

        tracing::debug!(endpoint = %endpoint, ssl_mode = %config.ssl_mode, "Connecting to MySQL");

        let timeout = Duration::from_secs(config.connect_timeout_seconds);
        let connection = tokio::time::timeout(timeout, options.connect())
            .await
            .map_err(|_| {
                DatabaseError::ConnectionFailed(format!(
                    "{endpoint}: timed out after {}s",
                    config.connect_timeout_seconds
                ))
            })?
            .map_err(|e| connect_error(&endpoint, e))?;

        tracing::info!(endpoint = %endpoint, "Connected to MySQL");

        Ok(Self {
            connection: Mutex::new(connection),
            endpoint,
        })
    }

    /// Test the connection with `SELECT 1`
    pub async fn test_connection(&self) -> Result<()> {
        let mut connection = self.connection.lock().await;
        sqlx::query("SELECT 1")
            .fetch_one(&mut *connection)
            .await
            .map_err(|e| DatabaseError::QueryFailed(format!("Connection test failed: {e}")))?;

        tracing::info!("MySQL connection test successful");
        Ok(())
    }

    /// Execute a query without parameters and return all rows
    ///
    /// The text is sent as is over the text protocol, trailing `;` included.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query(&self, query: &str) -> Result<Vec<MySqlRow>> {
        let mut connection = self.connection.lock().await;
        sqlx::Executor::fetch_all(&mut *connection, sqlx::raw_sql(query))
            .await
            .map_err(|e| DatabaseError::QueryFailed(describe_db_error(&e)).into())
    }

    /// Execute one or more statements without parameters
    ///
    /// Statements run on this client's session, so temporary tables created
    /// here are visible to later queries on the same client.
    pub async fn batch_execute(&self, statements: &str) -> Result<()> {
        let mut connection = self.connection.lock().await;
        sqlx::Executor::execute(&mut *connection, sqlx::raw_sql(statements))
            .await
            .map(|_| ())
            .map_err(|e| DatabaseError::QueryFailed(describe_db_error(&e)).into())
    }

    /// The connection endpoint (without password)
    pub fn endpoint_safe(&self) -> &str {
        &self.endpoint
    }
}

/// Translate the exporter's database settings into driver options
fn build_connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port())
        .username(&config.user)
        .database(&config.database)
        .ssl_mode(mysql_ssl_mode(config.ssl_mode));

    if let Some(password) = &config.password {
        let password: &str = password.expose_secret().as_ref();
        options = options.password(password);
    }

    options
}

/// `prefer` and `require` encrypt without verifying the certificate, as the
/// MySQL client does for `PREFERRED` and `REQUIRED`
fn mysql_ssl_mode(mode: SslMode) -> MySqlSslMode {
    match mode {
        SslMode::Disable => MySqlSslMode::Disabled,
        SslMode::Prefer => MySqlSslMode::Preferred,
        SslMode::Require => MySqlSslMode::Required,
    }
}

/// Classify a connect failure
fn connect_error(endpoint: &str, err: sqlx::Error) -> DatabaseError {
    let message = format!("{endpoint}: {}", describe_db_error(&err));
    let sqlstate = err.as_database_error().and_then(|db| db.code());
    match sqlstate.as_deref() {
        Some(ACCESS_DENIED_SQLSTATE) => DatabaseError::AuthenticationFailed(message),
        _ => DatabaseError::ConnectionFailed(message),
    }
}

/// Prefer the server's message and SQLSTATE over the driver's wrapper text
fn describe_db_error(err: &sqlx::Error) -> String {
    match err.as_database_error() {
        Some(db) => match db.code() {
            Some(code) => format!("{} ({})", db.message(), code),
            None => db.message().to_string(),
        },
        None => err.to_string(),
    }
}
