use tracing::{instrument, warn};

use super::selector;
use crate::{
    cli::{
        CommandResult,
        formatting::{format_header, format_player_line},
    },
    config::Config,
    services::mpris::PlayerControl,
};

/// List running players, marking the preferred one
///
/// # Errors
/// Returns CliError if the bus cannot be reached or players cannot be listed
#[instrument(skip(config))]
pub async fn run(config: &Config) -> CommandResult {
    let selector = selector(config).await?;
    let preferred = selector.store().load()?.preferred_player;
    let players = selector.players().await?;

    if players.is_empty() {
        return Ok("No media players found".to_string());
    }

    let mut lines = vec![format_header("Media players")];

    for player_id in players {
        let player = match selector.player(player_id.clone()).await {
            Ok(player) => player,
            Err(e) => {
                warn!("Skipping player {player_id}: {e}");
                continue;
            }
        };

        let state = match player.playback_status().await {
            Ok(state) => state,
            Err(e) => {
                warn!("Skipping unresponsive player {player_id}: {e}");
                continue;
            }
        };

        let short_name = player_id.short_name();
        let is_preferred = preferred.as_deref() == Some(short_name);
        lines.push(format_player_line(
            short_name,
            &player.identity().await,
            state,
            is_preferred,
        ));
    }

    Ok(lines.join("\n"))
}
