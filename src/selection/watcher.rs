use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::{SelectionError, SelectionStore};

/// Notification that the preferred-player selection changed.
///
/// Carries nothing beyond "changed"; the path is kept for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    /// The selection file that changed
    pub path: PathBuf,
}

/// Watches the selection file and reports every change to it.
///
/// The parent directory is watched rather than the file itself so that
/// editors replacing the file atomically are still noticed. Dropping the
/// watcher stops the notifications and closes the channel.
pub struct SelectionWatcher {
    _watcher: RecommendedWatcher,
}

impl SelectionWatcher {
    /// Start watching `store`'s file, creating it first if needed.
    ///
    /// Returns the watcher, which must be kept alive, and the receiving end
    /// of the event channel. The channel is unbounded since selection
    /// changes are rare but arrive in bursts.
    ///
    /// # Errors
    /// Returns error if the file cannot be created or the watcher fails to start.
    #[instrument(skip(store), fields(path = %store.path().display()))]
    pub fn start(
        store: &SelectionStore,
    ) -> Result<(Self, mpsc::UnboundedReceiver<SelectionEvent>), SelectionError> {
        store.ensure_exists()?;

        let path = store.path().to_path_buf();
        let (directory, file_name) = split_path(&path)?;

        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let Ok(event) = res else {
                return;
            };

            if !is_change(&event.kind) {
                return;
            }

            for changed in event.paths {
                if changed.file_name() != Some(file_name.as_os_str()) {
                    continue;
                }

                debug!("Selection file event: {:?}", event.kind);
                let _ = event_tx.send(SelectionEvent { path: changed });
            }
        })
        .map_err(|e| SelectionError::Watch {
            path: path.clone(),
            details: e.to_string(),
        })?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|e| SelectionError::Watch {
                path: directory.clone(),
                details: e.to_string(),
            })?;

        info!("Watching player selection for changes");
        Ok((Self { _watcher: watcher }, event_rx))
    }
}

fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

fn split_path(path: &Path) -> Result<(PathBuf, OsString), SelectionError> {
    let directory = path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| SelectionError::io(path, "selection file has no parent directory"))?;
    let file_name = path
        .file_name()
        .map(ToOwned::to_owned)
        .ok_or_else(|| SelectionError::io(path, "selection file has no file name"))?;

    Ok((directory, file_name))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::time::Duration;

    use super::*;
    use notify::event::{AccessKind, ModifyKind};
    use tempfile::TempDir;

    #[test]
    fn only_mutations_count_as_changes() {
        assert!(is_change(&EventKind::Modify(ModifyKind::Any)));
        assert!(!is_change(&EventKind::Access(AccessKind::Any)));
    }

    #[tokio::test]
    async fn editing_the_selection_emits_an_event() {
        let dir = TempDir::new().unwrap();
        let store = SelectionStore::new(dir.path().join("selection.json"));

        let (_watcher, mut events) = SelectionWatcher::start(&store).unwrap();
        store.set_preferred(Some("mpv".to_string())).unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.path.file_name(), store.path().file_name());
    }
}
