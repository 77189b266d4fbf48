//! Integration tests for configuration loading.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{collections::HashMap, fs, time::Duration};

use mediabar::{
    MediabarError,
    config::{Config, LogLevel},
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.bar.max_title_size, 30);
    assert_eq!(config.bar.max_artist_size, 20);
    assert_eq!(config.bar.command, "mediabar");
    assert_eq!(config.progress.poll_interval(), Duration::from_secs(1));
    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(config.player.ignored_players.is_empty());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[general]
log_level = "debug"

[bar]
max_title_size = 12

[player]
ignored_players = ["firefox", "chromium"]
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.bar.max_title_size, 12);
    assert_eq!(config.bar.max_artist_size, 20);
    assert_eq!(config.player.ignored_players, vec!["firefox", "chromium"]);
}

#[test]
fn invalid_toml_reports_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[bar\nmax_title_size = ");

    match Config::load_from(&path) {
        Err(MediabarError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn wrong_types_are_rejected() {
    let result = Config::from_toml("[bar]\nmax_title_size = \"long\"\n");
    assert!(matches!(result, Err(MediabarError::TomlParseError { .. })));
}

#[test]
fn environment_overrides_sizes() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("MEDIABAR_MAX_TITLE_SIZE", "42"),
        ("MEDIABAR_MAX_ARTIST_SIZE", " 7 "),
    ]);

    let mut config = Config::default();
    config.apply_env_overrides(|key| env.get(key).map(ToString::to_string));

    assert_eq!(config.bar.max_title_size, 42);
    assert_eq!(config.bar.max_artist_size, 7);
}

#[test]
fn unparsable_overrides_are_ignored() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("MEDIABAR_MAX_TITLE_SIZE", "wide"),
        ("MEDIABAR_MAX_ARTIST_SIZE", "-3"),
    ]);

    let mut config = Config::from_toml("[bar]\nmax_title_size = 15\n").unwrap();
    config.apply_env_overrides(|key| env.get(key).map(ToString::to_string));

    assert_eq!(config.bar.max_title_size, 15);
    assert_eq!(config.bar.max_artist_size, 20);
}

#[test]
fn poll_interval_has_a_floor() {
    let config = Config::from_toml("[progress]\npoll_interval_ms = 1\n").unwrap();
    assert_eq!(config.progress.poll_interval(), Duration::from_millis(50));
}

#[test]
fn schema_describes_every_section() {
    let schema = serde_json::to_value(Config::schema()).unwrap();
    let properties = schema.get("properties").unwrap();

    for section in ["general", "bar", "player", "progress"] {
        assert!(properties.get(section).is_some(), "missing {section}");
    }
}
