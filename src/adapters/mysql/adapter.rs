//! MySQL adapter implementing [`ContentSource`]

use crate::adapters::database::query::{
    ACTIVE_STATUS, GENERATED_CONTENT_QUERY, GENERATOR_TYPE, GENERATOR_VERSION,
};
use crate::adapters::database::traits::ContentSource;
use crate::adapters::mysql::client::MySQLClient;
use crate::adapters::mysql::models::generated_content_from_row;
use crate::config::DatabaseConfig;
use crate::domain::{GeneratedContent, Result};
use async_trait::async_trait;

/// MySQL implementation of [`ContentSource`]
pub struct MySQLAdapter {
    client: MySQLClient,
}

impl MySQLAdapter {
    /// Wrap an existing client
    pub fn new(client: MySQLClient) -> Self {
        Self { client }
    }

    /// Connect using the database section of the configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        Ok(Self::new(MySQLClient::connect(config).await?))
    }
}

#[async_trait]
impl ContentSource for MySQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn fetch_generated_content(&self) -> Result<Vec<GeneratedContent>> {
        tracing::debug!(
            generator = GENERATOR_TYPE,
            version = GENERATOR_VERSION,
            status = ACTIVE_STATUS,
            "Running export query"
        );

        let rows = self.client.query(GENERATED_CONTENT_QUERY).await?;

        tracing::debug!(rows = rows.len(), "Export query returned");

        rows.iter().map(generated_content_from_row).collect()
    }

    fn describe(&self) -> String {
        format!("mysql://{}", self.client.endpoint_safe())
    }
}
