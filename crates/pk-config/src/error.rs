//! Errors from configuration operations.

use thiserror::Error;

use crate::key::ConfigKey;

/// Errors that can occur when reading or mutating the registry.
///
/// Both variants are non-fatal: a failed `set` leaves the registry
/// untouched, and callers are free to ignore the error and re-read the
/// store instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The dotted key name does not belong to the recognized key set.
    #[error("unknown config key '{name}'")]
    UnknownKey { name: String },

    /// The proposed value was rejected by the key's validator.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: ConfigKey, reason: String },
}

impl From<ConfigError> for pk_common::Error {
    fn from(err: ConfigError) -> Self {
        pk_common::Error::Config(err.to_string())
    }
}
