use thiserror::Error;

use crate::{MediabarError, selection::SelectionError, services::mpris::MediaError};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument value was rejected.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Argument name
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// No player is available to act on.
    #[error("No media player is running")]
    NoPlayer,

    /// Player discovery or control failed.
    #[error(transparent)]
    Media(#[from] MediaError),

    /// The preferred-player store could not be read or written.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// A follow run ended with an error.
    #[error(transparent)]
    Runtime(#[from] MediabarError),

    /// Output could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result of a command: text for stdout, or the error to report.
pub type CommandResult = Result<String, CliError>;
