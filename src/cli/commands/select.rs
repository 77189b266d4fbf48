use tracing::instrument;

use crate::{cli::CommandResult, selection::SelectionStore};

/// Edit the preferred-player selection
///
/// Running `bar` and `progress` instances notice the change and end their run.
///
/// # Errors
/// Returns CliError if the selection store cannot be written
#[instrument]
pub fn run(name: Option<String>, disable: bool, clear: bool) -> CommandResult {
    let store = SelectionStore::default_location()?;
    apply(&store, name, disable, clear)
}

pub(crate) fn apply(
    store: &SelectionStore,
    name: Option<String>,
    disable: bool,
    clear: bool,
) -> CommandResult {
    if disable {
        store.set_disabled(true)?;
        return Ok("Player selection disabled".to_string());
    }

    if clear {
        store.clear()?;
        return Ok("Preferred player cleared".to_string());
    }

    match name {
        Some(name) => {
            store.set_preferred(Some(name.clone()))?;
            Ok(format!("Preferred player set to {name}"))
        }
        None => {
            store.clear()?;
            Ok("Preferred player cleared".to_string())
        }
    }
}
