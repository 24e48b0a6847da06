//! Database abstraction layer
//!
//! - [`traits`] - the [`ContentSource`] seam
//! - [`factory`] - opens the source for the configured engine
//! - [`query`] - the export query, shared by every engine
//! - [`columns`] - result column names and value helpers

pub mod columns;
pub mod factory;
pub mod query;
pub mod traits;

pub use factory::connect_source;
pub use traits::ContentSource;
