//! External integrations
//!
//! - [`database`] - the [`ContentSource`](database::ContentSource) seam, the
//!   export query and the engine factory
//! - [`mysql`] - MySQL implementation
//! - [`postgresql`] - PostgreSQL implementation

pub mod database;
pub mod mysql;
pub mod postgresql;
