pub mod follow;
pub mod list;
pub mod schema;
pub mod select;
pub mod transport;

use std::sync::Arc;

use crate::{
    cli::CliError,
    config::Config,
    selection::SelectionStore,
    services::mpris::{MprisSelector, PlayerControl, PlayerSelector},
};

/// Selector over the session bus using the default selection store.
async fn selector(config: &Config) -> Result<MprisSelector, CliError> {
    let store = SelectionStore::default_location()?;
    Ok(MprisSelector::new(&config.player, store).await?)
}

/// The player transport commands act on.
async fn best_player(config: &Config) -> Result<Arc<dyn PlayerControl>, CliError> {
    selector(config)
        .await?
        .best_player()
        .await?
        .ok_or(CliError::NoPlayer)
}
