//! Error types for botify-core
//!
//! Absence of data (unknown track, no candidates, empty similarity list) is
//! never an error: strategies route it down the fallback cascade. The variants
//! below are the failures that must reach the caller.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// botify-core error types
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected at construction time (fail fast, before serving)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Registry lookup for an experiment that was never registered
    #[error("Unknown experiment: {0}\nRegister it in the experiment registry before assigning users")]
    UnknownExperiment(String),

    /// Backing key-value store failed (not retried here; the caller owns retry policy)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Stored blob could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
