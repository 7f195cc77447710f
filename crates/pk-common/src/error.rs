//! Error types for probekit.

use thiserror::Error;

/// Result type alias for probekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for probekit.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    // Platform errors (20-29)
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting in JSON output.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::UnsupportedPlatform(_) => 20,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_use_the_10_band() {
        let err = Error::Config("bad value".to_string());
        assert_eq!(err.code(), 10);
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert_eq!(err.code(), 60);
    }
}
