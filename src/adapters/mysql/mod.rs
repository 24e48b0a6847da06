//! MySQL adapter
//!
//! Connection handling and row decoding over `sqlx`.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::MySQLAdapter;
pub use client::MySQLClient;
