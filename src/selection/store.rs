use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::SelectionError;
use crate::config::ConfigPaths;

/// The user's player preference, shared between the CLI and running routers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    /// Short name of the preferred player (`mpv`, `spotify`, ...)
    #[serde(default)]
    pub preferred_player: Option<String>,

    /// When set, no player is selected and the bar offers a picker instead
    #[serde(default)]
    pub disabled: bool,

    /// Last time this selection was updated
    #[serde(default = "SystemTime::now")]
    pub last_updated: SystemTime,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            preferred_player: None,
            disabled: false,
            last_updated: SystemTime::now(),
        }
    }
}

/// File-backed storage for the [`Selection`]
#[derive(Debug, Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    /// Store backed by an explicit file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location inside the config directory
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined
    pub fn default_location() -> Result<Self, SelectionError> {
        let path = ConfigPaths::selection_file().map_err(|e| SelectionError::io("selection.json", e))?;
        Ok(Self::new(path))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the selection from file, or the default if none exists
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Selection, SelectionError> {
        if !self.path.exists() {
            return Ok(Selection::default());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| SelectionError::io(&self.path, e))?;
        let selection = serde_json::from_str(&content).unwrap_or_else(|_| {
            warn!("Invalid selection file, using defaults");
            Selection::default()
        });

        Ok(selection)
    }

    /// Save the selection to file
    ///
    /// # Errors
    /// Returns error if file cannot be written or directory cannot be created
    pub fn save(&self, selection: &Selection) -> Result<(), SelectionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SelectionError::io(parent, e))?;
        }

        let content = serde_json::to_string_pretty(selection)?;
        fs::write(&self.path, content).map_err(|e| SelectionError::io(&self.path, e))
    }

    /// Write the default selection if no file exists yet
    ///
    /// # Errors
    /// Returns error if the file cannot be created
    pub fn ensure_exists(&self) -> Result<(), SelectionError> {
        if self.path.exists() {
            return Ok(());
        }

        info!("Creating selection file at {}", self.path.display());
        self.save(&Selection::default())
    }

    /// Prefer `player` (a short name) and re-enable selection
    ///
    /// # Errors
    /// Returns error if the selection cannot be loaded or saved
    pub fn set_preferred(&self, player: Option<String>) -> Result<(), SelectionError> {
        self.update(|selection| {
            selection.preferred_player = player;
            selection.disabled = false;
        })
    }

    /// Switch player selection on or off
    ///
    /// # Errors
    /// Returns error if the selection cannot be loaded or saved
    pub fn set_disabled(&self, disabled: bool) -> Result<(), SelectionError> {
        self.update(|selection| selection.disabled = disabled)
    }

    /// Forget the preferred player and re-enable selection
    ///
    /// # Errors
    /// Returns error if the selection cannot be loaded or saved
    pub fn clear(&self) -> Result<(), SelectionError> {
        self.set_preferred(None)
    }

    fn update(&self, change: impl FnOnce(&mut Selection)) -> Result<(), SelectionError> {
        let mut selection = self.load()?;
        change(&mut selection);
        selection.last_updated = SystemTime::now();
        self.save(&selection)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SelectionStore {
        SelectionStore::new(dir.path().join("nested/selection.json"))
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let selection = store_in(&dir).load().unwrap();

        assert_eq!(selection.preferred_player, None);
        assert!(!selection.disabled);
    }

    #[test]
    fn preferred_player_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set_disabled(true).unwrap();
        store.set_preferred(Some("mpv".to_string())).unwrap();

        let selection = store.load().unwrap();
        assert_eq!(selection.preferred_player.as_deref(), Some("mpv"));
        assert!(!selection.disabled);
    }

    #[test]
    fn invalid_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert_eq!(store.load().unwrap().preferred_player, None);
    }

    #[test]
    fn ensure_exists_creates_file_once() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.ensure_exists().unwrap();
        assert!(store.path().exists());

        store.set_preferred(Some("vlc".to_string())).unwrap();
        store.ensure_exists().unwrap();
        assert_eq!(store.load().unwrap().preferred_player.as_deref(), Some("vlc"));
    }

    #[test]
    fn clear_forgets_preference_and_enables_selection() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.set_preferred(Some("mpv".to_string())).unwrap();
        store.set_disabled(true).unwrap();
        store.clear().unwrap();

        let selection = store.load().unwrap();
        assert_eq!(selection.preferred_player, None);
        assert!(!selection.disabled);
    }
}
