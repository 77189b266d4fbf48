//! Unit tests for CLI module
//!
//! Argument parsing, formatting and the pure parts of the commands.
//! No D-Bus or actual player control.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use tempfile::TempDir;

use crate::{
    cli::{
        Cli, CliError, Commands,
        commands::{
            follow::parse_fraction,
            select,
            transport::{clamp_to_length, validate_position},
        },
        formatting::{format_error, format_player_line},
    },
    selection::SelectionStore,
    services::mpris::PlaybackState,
};

fn parse(args: &[&str]) -> Commands {
    Cli::try_parse_from(std::iter::once("mediabar").chain(args.iter().copied()))
        .unwrap()
        .command
}

#[test]
fn bar_takes_the_select_command() {
    assert_eq!(
        parse(&["bar", "--select-command", "rofi -show mpris"]),
        Commands::Bar {
            select_command: "rofi -show mpris".to_string()
        }
    );
}

#[test]
fn volume_accepts_signed_deltas() {
    assert_eq!(parse(&["volume", "+0.05"]), Commands::Volume { delta: 0.05 });
    assert_eq!(parse(&["volume", "-0.05"]), Commands::Volume { delta: -0.05 });
}

#[test]
fn position_zero_restarts_the_track() {
    assert_eq!(parse(&["position", "0"]), Commands::Position { seconds: 0.0 });
}

#[test]
fn select_requires_a_name_or_flag() {
    assert!(Cli::try_parse_from(["mediabar", "select"]).is_err());
    assert!(Cli::try_parse_from(["mediabar", "select", "mpv", "--disable"]).is_err());

    assert_eq!(
        parse(&["select", "--disable"]),
        Commands::Select {
            name: None,
            disable: true,
            clear: false
        }
    );
}

#[test]
fn only_follow_commands_are_long_running() {
    assert!(parse(&["progress"]).is_long_running());
    assert!(!parse(&["next"]).is_long_running());
}

#[test]
fn select_edits_the_store() {
    let dir = TempDir::new().unwrap();
    let store = SelectionStore::new(dir.path().join("selection.json"));

    select::apply(&store, Some("mpv".to_string()), false, false).unwrap();
    assert_eq!(store.load().unwrap().preferred_player.as_deref(), Some("mpv"));

    select::apply(&store, None, true, false).unwrap();
    assert!(store.load().unwrap().disabled);

    select::apply(&store, None, false, true).unwrap();
    let selection = store.load().unwrap();
    assert!(!selection.disabled);
    assert_eq!(selection.preferred_player, None);
}

#[test]
fn position_is_validated_and_clamped() {
    assert!(matches!(
        validate_position(-1.0),
        Err(CliError::InvalidArgument { .. })
    ));
    assert!(validate_position(f64::NAN).is_err());

    assert_eq!(clamp_to_length(500.0, 200.0), 200.0);
    assert_eq!(clamp_to_length(500.0, 0.0), 500.0);
}

#[test]
fn progress_input_is_parsed_exactly() {
    assert_eq!(parse_fraction("0.25\n"), Some(0.25));
    assert_eq!(parse_fraction(&(1.0_f64 / 3.0).to_string()), Some(1.0 / 3.0));
    assert_eq!(parse_fraction("1.5"), Some(1.0));
    assert_eq!(parse_fraction("NaN"), None);
    assert_eq!(parse_fraction("seek"), None);
}

#[test]
fn player_line_marks_the_preferred_player() {
    let line = format_player_line("mpv", "mpv Media Player", PlaybackState::Playing, true);
    assert!(line.starts_with("* "));
    assert!(line.contains("mpv Media Player"));
    assert!(line.contains("Playing"));

    let line = format_player_line("vlc", "VLC", PlaybackState::Paused, false);
    assert!(line.starts_with("  "));
}

#[test]
fn errors_are_highlighted() {
    let formatted = format_error("boom");
    assert!(formatted.contains("boom"));
    assert!(formatted.ends_with("\x1b[0m"));
}
