//! Content source factory
//!
//! Opens the connection for the engine named in the database configuration.

use crate::adapters::database::traits::ContentSource;
use crate::adapters::mysql::MySQLAdapter;
use crate::adapters::postgresql::PostgreSQLAdapter;
use crate::config::{DatabaseConfig, DatabaseEngine};
use crate::domain::Result;
use std::sync::Arc;

/// Connect to the configured database
///
/// Examines `config.engine` and opens a single connection with the matching
/// driver.
///
/// # Errors
///
/// Returns a connection or authentication error if the server cannot be
/// reached or rejects the credentials.
pub async fn connect_source(
    config: &DatabaseConfig,
) -> Result<Arc<dyn ContentSource + Send + Sync>> {
    match config.engine {
        DatabaseEngine::MySql => {
            tracing::info!("Creating MySQL client");
            let adapter = MySQLAdapter::connect(config).await?;

            Ok(Arc::new(adapter) as Arc<dyn ContentSource + Send + Sync>)
        }
        DatabaseEngine::PostgreSql => {
            tracing::info!("Creating PostgreSQL client");
            let adapter = PostgreSQLAdapter::connect(config).await?;

            Ok(Arc::new(adapter) as Arc<dyn ContentSource + Send + Sync>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SslMode;
    use test_case::test_case;

    #[test_case(DatabaseEngine::MySql ; "mysql")]
    #[test_case(DatabaseEngine::PostgreSql ; "postgresql")]
    #[tokio::test]
    async fn test_refused_connection_is_connection_failure(engine: DatabaseEngine) {
        let config = DatabaseConfig {
            engine,
            host: "127.0.0.1".to_string(),
            port: Some(1),
            user: "exporter".to_string(),
            database: "coachbot".to_string(),
            ssl_mode: SslMode::Disable,
            connect_timeout_seconds: 2,
            ..DatabaseConfig::default()
        };

        let err = match connect_source(&config).await {
            Ok(_) => panic!("connection to port 1 should fail"),
            Err(e) => e,
        };
        assert_eq!(err.exit_code(), 4);
    }
}
