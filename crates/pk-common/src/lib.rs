//! Probekit common types and errors.
//!
//! This crate provides foundational types shared across probekit crates:
//! - Common error types with stable error codes
//! - Output schema versioning

pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use schema::SCHEMA_VERSION;
