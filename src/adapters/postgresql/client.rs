//! PostgreSQL client implementation
//!
//! A single connection, opened once and held until the client is dropped.

use crate::config::{DatabaseConfig, SslMode};
use crate::domain::{DatabaseError, Result};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::error::SqlState;
use tokio_postgres::{Client, NoTls, Row};

/// PostgreSQL client
pub struct PostgreSQLClient {
    client: Client,
    endpoint: String,
}

impl PostgreSQLClient {
    /// Connect to PostgreSQL
    ///
    /// The connection driver runs on a spawned task; it ends when the client
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::AuthenticationFailed` when the server rejects
    /// the credentials and `DatabaseError::ConnectionFailed` for anything else
    /// that prevents the session from starting.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pg_config = build_pg_config(config);
        let endpoint = config.endpoint_safe();

        tracing::debug!(endpoint = %endpoint, ssl_mode = %config.ssl_mode, "Connecting to PostgreSQL");

        let client = match tls_connector(config.ssl_mode)? {
            None => {
                let (client, connection) = pg_config
                    .connect(NoTls)
                    .await
                    .map_err(|e| connect_error(&endpoint, e))?;
                tokio::spawn(async move {
                    if let Err(e) = connection.await {
                        tracing::error!(error = %e, "PostgreSQL connection error");
                    }
                });
                client
            }
            Some(connector) => {
                let tls = postgres_native_tls::MakeTlsConnector::new(connector);
                let (client, connection) = pg_config
                    .connect(tls)
                    .await
                    .map_err(|e| connect_error(&endpoint, e))?;
                tokio::spawn(async move {
                    if let Err(e) = connection.await {
                        tracing::error!(error = %e, "PostgreSQL connection error");
                    }
                });
                client
            }
        };

        tracing::info!(endpoint = %endpoint, "Connected to PostgreSQL");

        Ok(Self { client, endpoint })
    }

    /// Test the connection with `SELECT 1`
    pub async fn test_connection(&self) -> Result<()> {
        self.client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| DatabaseError::QueryFailed(format!("Connection test failed: {e}")))?;

        tracing::info!("PostgreSQL connection test successful");
        Ok(())
    }

    /// Execute a query and return rows
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query(
        &self,
        query: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<Vec<Row>> {
        self.client
            .query(query, params)
            .await
            .map_err(|e| DatabaseError::QueryFailed(describe_db_error(&e)).into())
    }

    /// Execute one or more statements without parameters
    ///
    /// Statements run on this client's session, so temporary tables created
    /// here are visible to later queries on the same client.
    pub async fn batch_execute(&self, statements: &str) -> Result<()> {
        self.client
            .batch_execute(statements)
            .await
            .map_err(|e| DatabaseError::QueryFailed(describe_db_error(&e)).into())
    }

    /// The connection endpoint (without password)
    pub fn endpoint_safe(&self) -> &str {
        &self.endpoint
    }
}

/// Translate the exporter's database settings into a driver config
fn build_pg_config(config: &DatabaseConfig) -> tokio_postgres::Config {
    let mut pg_config = tokio_postgres::Config::new();
    pg_config
        .host(&config.host)
        .port(config.port())
        .user(&config.user)
        .dbname(&config.database)
        .application_name(env!("CARGO_PKG_NAME"))
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .ssl_mode(match config.ssl_mode {
            SslMode::Disable => tokio_postgres::config::SslMode::Disable,
            SslMode::Prefer => tokio_postgres::config::SslMode::Prefer,
            SslMode::Require => tokio_postgres::config::SslMode::Require,
        });

    if let Some(password) = &config.password {
        let password: &str = password.expose_secret().as_ref();
        pg_config.password(password);
    }

    pg_config
}

/// Certificate checks applied to a TLS session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TlsVerification {
    /// Encrypt only; self-signed and private-CA certificates are accepted
    AcceptAny,
    /// Verify the certificate chain and host name
    Full,
}

/// TLS policy for an ssl mode; `None` means plain TCP
///
/// `prefer` follows libpq and does not verify the server certificate.
fn tls_verification(mode: SslMode) -> Option<TlsVerification> {
    match mode {
        SslMode::Disable => None,
        SslMode::Prefer => Some(TlsVerification::AcceptAny),
        SslMode::Require => Some(TlsVerification::Full),
    }
}

/// Build the TLS connector for an ssl mode
fn tls_connector(mode: SslMode) -> Result<Option<native_tls::TlsConnector>> {
    let verification = match tls_verification(mode) {
        Some(verification) => verification,
        None => return Ok(None),
    };

    let mut builder = native_tls::TlsConnector::builder();
    if verification == TlsVerification::AcceptAny {
        builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    let connector = builder.build().map_err(|e| {
        DatabaseError::ConnectionFailed(format!("Failed to build TLS connector: {e}"))
    })?;
    Ok(Some(connector))
}

/// Classify a connect failure
fn connect_error(endpoint: &str, err: tokio_postgres::Error) -> DatabaseError {
    let message = format!("{endpoint}: {}", describe_db_error(&err));
    match err.code() {
        Some(code)
            if *code == SqlState::INVALID_PASSWORD
                || *code == SqlState::INVALID_AUTHORIZATION_SPECIFICATION =>
        {
            DatabaseError::AuthenticationFailed(message)
        }
        _ => DatabaseError::ConnectionFailed(message),
    }
}

/// Prefer the server's message over the driver's generic "db error"
fn describe_db_error(err: &tokio_postgres::Error) -> String {
    match err.as_db_error() {
        Some(db) => format!("{} ({})", db.message(), db.code().code()),
        None => err.to_string(),
    }
}
