use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use zbus::{Connection, fdo::DBusProxy};

use super::{
    MPRIS_BUS_PREFIX, MediaError, MprisPlayer, PlaybackState, PlayerControl, PlayerId,
    PlayerSelector,
};
use crate::{config::PlayerConfig, selection::SelectionStore};

/// Finds running MPRIS players and picks the one a run should follow.
pub struct MprisSelector {
    connection: Connection,
    ignored_patterns: Vec<String>,
    store: SelectionStore,
}

impl MprisSelector {
    /// Connect to the session bus.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::InitializationFailed` if the D-Bus connection fails
    pub async fn new(config: &PlayerConfig, store: SelectionStore) -> Result<Self, MediaError> {
        let connection = Connection::session().await.map_err(|e| {
            MediaError::InitializationFailed(format!("D-Bus connection failed: {e}"))
        })?;

        Ok(Self {
            connection,
            ignored_patterns: config.ignored_players.clone(),
            store,
        })
    }

    /// Bus names of every MPRIS player not matched by an ignore pattern, sorted.
    ///
    /// # Errors
    ///
    /// Returns error if D-Bus proxy creation or name listing fails
    #[instrument(skip(self))]
    pub async fn players(&self) -> Result<Vec<PlayerId>, MediaError> {
        let dbus_proxy = DBusProxy::new(&self.connection)
            .await
            .map_err(|e| MediaError::InitializationFailed(format!("DBus proxy failed: {e}")))?;

        let names = dbus_proxy
            .list_names()
            .await
            .map_err(|e| MediaError::DbusError(e.into()))?;

        let mut players: Vec<PlayerId> = names
            .iter()
            .map(|name| name.as_str())
            .filter(|name| name.starts_with(MPRIS_BUS_PREFIX))
            .filter(|name| !should_ignore(name, &self.ignored_patterns))
            .map(PlayerId::from_bus_name)
            .collect();
        players.sort();

        debug!("Found {} MPRIS player(s)", players.len());
        Ok(players)
    }

    /// Open a handle on a specific player.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::DbusError` if the proxy cannot be built.
    pub async fn player(&self, player_id: PlayerId) -> Result<MprisPlayer, MediaError> {
        MprisPlayer::connect(&self.connection, player_id).await
    }

    /// The preferred-player store consulted by [`PlayerSelector::best_player`].
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }
}

#[async_trait]
impl PlayerSelector for MprisSelector {
    #[instrument(skip(self))]
    async fn best_player(&self) -> Result<Option<Arc<dyn PlayerControl>>, MediaError> {
        let selection = self.store.load().map_err(|e| {
            MediaError::InitializationFailed(format!("Failed to read player selection: {e}"))
        })?;

        if selection.disabled {
            info!("Player selection is disabled");
            return Err(MediaError::SelectionDisabled);
        }

        let mut candidates = Vec::new();
        for player_id in self.players().await? {
            let player = match self.player(player_id.clone()).await {
                Ok(player) => player,
                Err(e) => {
                    warn!("Skipping player {player_id}: {e}");
                    continue;
                }
            };

            match player.playback_status().await {
                Ok(state) => candidates.push((player, state)),
                Err(e) => warn!("Skipping unresponsive player {player_id}: {e}"),
            }
        }

        let ranked: Vec<(PlayerId, PlaybackState)> = candidates
            .iter()
            .map(|(player, state)| (player.id().clone(), *state))
            .collect();

        let Some(chosen) = choose_player(&ranked, selection.preferred_player.as_deref()) else {
            return Ok(None);
        };

        info!("Selected player {chosen}");
        let player = candidates
            .into_iter()
            .map(|(player, _)| player)
            .find(|player| *player.id() == chosen);

        Ok(player.map(|player| Arc::new(player) as Arc<dyn PlayerControl>))
    }
}

/// Check if a player should be ignored based on its bus name
pub fn should_ignore(bus_name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| bus_name.contains(pattern.as_str()))
}

/// Rank candidates and return the one to follow.
///
/// The preferred player wins when present; otherwise the first playing
/// player, then the first paused one, then whatever comes first.
pub fn choose_player(
    candidates: &[(PlayerId, PlaybackState)],
    preferred: Option<&str>,
) -> Option<PlayerId> {
    if let Some(preferred) = preferred {
        let preferred_id = PlayerId::from_short_name(preferred);
        if let Some((id, _)) = candidates
            .iter()
            .find(|(id, _)| *id == preferred_id || id.bus_name() == preferred)
        {
            return Some(id.clone());
        }
        debug!("Preferred player {preferred} is not running");
    }

    [PlaybackState::Playing, PlaybackState::Paused]
        .iter()
        .find_map(|wanted| {
            candidates
                .iter()
                .find(|(_, state)| state == wanted)
                .map(|(id, _)| id.clone())
        })
        .or_else(|| candidates.first().map(|(id, _)| id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, state: PlaybackState) -> (PlayerId, PlaybackState) {
        (PlayerId::from_short_name(name), state)
    }

    #[test]
    fn preferred_player_wins() {
        let candidates = vec![
            candidate("spotify", PlaybackState::Playing),
            candidate("mpv", PlaybackState::Paused),
        ];

        assert_eq!(
            choose_player(&candidates, Some("mpv")),
            Some(PlayerId::from_short_name("mpv"))
        );
    }

    #[test]
    fn missing_preferred_falls_back_to_playing() {
        let candidates = vec![
            candidate("firefox", PlaybackState::Paused),
            candidate("spotify", PlaybackState::Playing),
        ];

        assert_eq!(
            choose_player(&candidates, Some("mpv")),
            Some(PlayerId::from_short_name("spotify"))
        );
    }

    #[test]
    fn paused_beats_stopped() {
        let candidates = vec![
            candidate("a", PlaybackState::Stopped),
            candidate("b", PlaybackState::Paused),
        ];

        assert_eq!(
            choose_player(&candidates, None),
            Some(PlayerId::from_short_name("b"))
        );
    }

    #[test]
    fn first_player_when_nothing_plays() {
        let candidates = vec![
            candidate("a", PlaybackState::Stopped),
            candidate("b", PlaybackState::Stopped),
        ];

        assert_eq!(
            choose_player(&candidates, None),
            Some(PlayerId::from_short_name("a"))
        );
    }

    #[test]
    fn no_candidates_no_player() {
        assert_eq!(choose_player(&[], Some("mpv")), None);
    }

    #[test]
    fn ignore_patterns_match_substrings() {
        let patterns = vec!["firefox".to_string()];

        assert!(should_ignore("org.mpris.MediaPlayer2.firefox.instance123", &patterns));
        assert!(!should_ignore("org.mpris.MediaPlayer2.mpv", &patterns));
    }
}
