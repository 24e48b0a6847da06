//! Database abstraction traits
//!
//! The exporter only needs one thing from a database: the generated-content
//! rows selected by the fixed export query.

use crate::domain::{GeneratedContent, Result};
use async_trait::async_trait;

/// Source of generated-content rows
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Round-trip a trivial statement to prove the connection works
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails.
    async fn test_connection(&self) -> Result<()>;

    /// Run the export query and decode every row
    ///
    /// Rows come back in query order (ascending by standard).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a column cannot be decoded.
    async fn fetch_generated_content(&self) -> Result<Vec<GeneratedContent>>;

    /// Human-readable description of the source, without credentials
    fn describe(&self) -> String;
}
