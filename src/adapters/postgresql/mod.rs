//! PostgreSQL adapter
//!
//! Connection handling and row decoding over `tokio-postgres`.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
