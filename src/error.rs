use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, KohlrahbiError>;

/// Error type covering the failure cases of building, reading and storing
/// AHB conditions.
#[derive(Debug, Error)]
pub enum KohlrahbiError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a conditions table or document does not have the expected shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raised when a string does not name a known flavour.
    #[error("unknown flavour '{0}'")]
    UnknownFlavour(String),

    /// Raised when a string does not name a known output format.
    #[error("unknown output format '{0}'")]
    UnknownOutputFormat(String),

    /// Raised when a string does not name a known EDIFACT format.
    #[error("unknown EDIFACT format '{0}'")]
    UnknownEdifactFormat(String),

    /// Raised when a Pruefidentifikator is not five digits.
    #[error("invalid Pruefidentifikator '{0}'")]
    InvalidPruefidentifikator(String),

    /// Raised when a Pruefidentifikator prefix maps to no EDIFACT format.
    #[error("no EDIFACT format known for Pruefidentifikator '{0}'")]
    UnknownPruefidentifikator(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
