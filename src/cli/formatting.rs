//! Formatting utilities for CLI output.

use crate::services::mpris::PlaybackState;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats error messages with styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats secondary information
pub fn format_dim(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Colors a playback state: green when playing, yellow when paused
pub fn format_state(state: PlaybackState) -> String {
    let color = match state {
        PlaybackState::Playing => Colors::GREEN,
        PlaybackState::Paused => Colors::YELLOW,
        PlaybackState::Stopped => Colors::DIM,
    };
    format!("{color}{state}{}", Colors::RESET)
}

/// One `list` line: marker, short name, identity and state.
///
/// The preferred player is marked with `*`.
pub fn format_player_line(
    short_name: &str,
    identity: &str,
    state: PlaybackState,
    preferred: bool,
) -> String {
    let marker = if preferred { "*" } else { " " };
    format!(
        "{marker} {}{short_name}{} {} {}",
        Colors::BOLD,
        Colors::RESET,
        format_dim(&format!("({identity})")),
        format_state(state)
    )
}
