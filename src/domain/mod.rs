//! Core domain types
//!
//! - [`content`] - The exported generated-content record
//! - [`errors`] - Error hierarchy
//! - [`result`] - Result alias

pub mod content;
pub mod errors;
pub mod result;

pub use content::{distinct_standards, GeneratedContent};
pub use errors::{DatabaseError, ExporterError};
pub use result::Result;
