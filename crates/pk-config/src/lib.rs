//! Probekit session configuration registry.
//!
//! This crate provides:
//! - The closed set of recognized session settings ([`ConfigKey`])
//! - Dynamically typed setting values with script-style coercion rules
//!   ([`ConfigValue`])
//! - Per-key validation of proposed values
//! - Per-key help text for the interactive `e?` command
//! - Serialization of the full registry as a batch of r2 `e` directives
//! - Config snapshots for session telemetry
//!
//! The registry is owned by the session and mutated only through
//! [`ConfigRegistry::set`]; external subsystems (stalker, hooks, symbol
//! resolution, search) poll current values through the read accessors.

pub mod error;
pub mod help;
pub mod key;
pub mod registry;
pub mod snapshot;
pub mod validate;
pub mod value;

pub use error::ConfigError;
pub use help::help_for;
pub use key::ConfigKey;
pub use registry::ConfigRegistry;
pub use snapshot::{ConfigSnapshot, SnapshotEntry};
pub use value::ConfigValue;
