use std::path::Path;

use thiserror::Error;

use crate::{selection::SelectionError, services::mpris::MediaError};

/// Error types for the mediabar application.
///
/// Covers configuration loading, the player-facing media layer and the
/// preferred-player selection store. Anything surfacing as this type from
/// the router is fatal to the current run.
#[derive(Error, Debug)]
pub enum MediabarError {
    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Media player query or control failure
    #[error(transparent)]
    Media(#[from] MediaError),

    /// Preferred-player store or watcher failure
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// A specialized `Result` type for mediabar operations.
pub type Result<T> = std::result::Result<T, MediabarError>;

impl MediabarError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        MediabarError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }
}
