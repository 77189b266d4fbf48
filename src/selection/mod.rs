//! Preferred-player selection.
//!
//! The user's choice of player lives in a small JSON file. The bar commands
//! edit it and running routers watch it: any change ends the current run so
//! that selection starts over with the new preference.

mod store;
mod watcher;

pub use store::{Selection, SelectionStore};
pub use watcher::{SelectionEvent, SelectionWatcher};

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the selection store and watcher.
#[derive(Error, Debug)]
pub enum SelectionError {
    /// Reading or writing the selection file failed
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Error details
        details: String,
    },

    /// Serializing the selection failed
    #[error("Failed to serialize selection: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The file system watcher could not be set up
    #[error("Failed to watch '{path}': {details}")]
    Watch {
        /// Path being watched
        path: PathBuf,
        /// Watcher error details
        details: String,
    },
}

impl SelectionError {
    pub(crate) fn io(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            details: error.to_string(),
        }
    }
}
