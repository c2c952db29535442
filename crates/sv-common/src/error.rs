//! Error types for the version report tool.
//!
//! External tools failing or missing is report content, not an error: the
//! runner prints a shell-style message and moves on. The variants here cover
//! the only failures the tool itself can produce.

use thiserror::Error;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while emitting the report.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading from or writing to the report stream failed.
    #[error("report stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// A spawned section command could not be reaped.
    #[error("failed to wait for {command}: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
