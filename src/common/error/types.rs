//! Unified error types for the Longan library.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A dialect was constructed from an unusable character pair
    #[error("Invalid dialect: {0}")]
    InvalidDialect(String),

    /// A forbidden control character appeared where only plain text is
    /// allowed; carries the symbolic name of the character (e.g. `"\\n"`)
    #[error("Wrong value, '{0}' not permitted for CSV format outside quotes")]
    InvalidValue(&'static str),

    /// Malformed CSV text; carries the offending line or partial row
    #[error("Could not parse, <{0}> does not match CSV format")]
    Parse(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
