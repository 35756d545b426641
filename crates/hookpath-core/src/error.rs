// Rust guideline compliant 2026-10-18

//! Error types for the hookpath core library.

use thiserror::Error;

/// Result type alias for hookpath operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hookpath operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Repository discovery or config store access failed.
    ///
    /// The message is the one reported by the Git layer, unchanged.
    #[error(transparent)]
    Git(#[from] git2::Error),

    /// The hooks directory value was rejected.
    #[error("Invalid hooks path: {0}")]
    InvalidHooksPath(String),

    /// The configuration file could not be parsed.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
