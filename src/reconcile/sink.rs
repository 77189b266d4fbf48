use std::{fmt, io, sync::Arc};

use crate::services::mpris::PlayerControl;

use super::Snapshot;

/// Command line a front end runs to open the player picker.
///
/// Attached to every frame so the user can always reach the picker,
/// including while nothing is playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionAction(String);

impl SelectionAction {
    /// Wrap the picker command.
    pub fn new(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    /// The command as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Front end that displays what the router decides.
///
/// Each call replaces whatever was displayed before. A render may only be
/// issued with a fully populated snapshot.
pub trait RenderSink: Send {
    /// A player became active. Sinks that talk back to the player keep the handle.
    fn attach(&mut self, _player: Arc<dyn PlayerControl>) {}

    /// Display `snapshot`, with the picker reachable through `action`.
    ///
    /// # Errors
    ///
    /// Returns error if the frame cannot be written out.
    fn render(&mut self, snapshot: &Snapshot, action: &SelectionAction) -> io::Result<()>;

    /// Selection is disabled; offer only the picker.
    ///
    /// # Errors
    ///
    /// Returns error if the frame cannot be written out.
    fn render_selection_prompt(&mut self, action: &SelectionAction) -> io::Result<()>;

    /// No player is running.
    ///
    /// # Errors
    ///
    /// Returns error if the frame cannot be written out.
    fn render_idle(&mut self) -> io::Result<()>;

    /// Show an operator-visible error message.
    ///
    /// # Errors
    ///
    /// Returns error if the frame cannot be written out.
    fn render_error(&mut self, message: &str) -> io::Result<()>;
}
