use async_trait::async_trait;
use futures::{StreamExt, stream::BoxStream};
use tracing::instrument;
use zbus::{
    Connection, fdo,
    proxy::CacheProperties,
    zvariant::ObjectPath,
};

use super::{
    MPRIS_OBJECT_PATH, MediaError, MediaPlayer2PlayerProxy, MediaPlayer2Proxy, PlaybackState,
    PlayerControl, PlayerId, PlayerSignal, TrackMetadata, Volume, utils,
};

/// Handle on one running MPRIS player.
///
/// Properties are never cached: each getter performs a fresh D-Bus call so
/// callers always see the player's current answer, or an error if it
/// stopped answering.
pub struct MprisPlayer {
    id: PlayerId,
    connection: Connection,
    proxy: MediaPlayer2PlayerProxy<'static>,
}

impl MprisPlayer {
    /// Open a handle on the player owning `id`.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::DbusError` if the proxy cannot be built.
    #[instrument(skip(connection), fields(bus_name = %id.bus_name()))]
    pub async fn connect(connection: &Connection, id: PlayerId) -> Result<Self, MediaError> {
        let proxy = MediaPlayer2PlayerProxy::builder(connection)
            .destination(id.bus_name().to_string())
            .map_err(MediaError::DbusError)?
            .cache_properties(CacheProperties::No)
            .build()
            .await
            .map_err(MediaError::DbusError)?;

        Ok(Self {
            id,
            connection: connection.clone(),
            proxy,
        })
    }

    /// Human-readable player name, falling back to the short bus name.
    pub async fn identity(&self) -> String {
        let identity: zbus::Result<String> = async {
            let proxy = MediaPlayer2Proxy::builder(&self.connection)
                .destination(self.id.bus_name().to_string())?
                .build()
                .await?;
            proxy.identity().await
        }
        .await;

        identity.unwrap_or_else(|_| self.id.short_name().to_string())
    }

    async fn name_owner_signals(&self) -> Result<BoxStream<'static, PlayerSignal>, MediaError> {
        let dbus_proxy = fdo::DBusProxy::new(&self.connection)
            .await
            .map_err(|e| MediaError::InitializationFailed(format!("DBus proxy failed: {e}")))?;

        let changes = dbus_proxy
            .receive_name_owner_changed_with_args(&[(0, self.id.bus_name())])
            .await
            .map_err(|e| {
                MediaError::InitializationFailed(format!("Signal subscription failed: {e}"))
            })?;

        Ok(changes
            .filter_map(|signal| async move {
                let args = signal.args().ok()?;
                Some(PlayerSignal::NameOwnerChanged {
                    name: args.name().to_string(),
                    old_owner: Option::as_ref(args.old_owner())
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    new_owner: Option::as_ref(args.new_owner())
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                })
            })
            .boxed())
    }

    async fn property_signals(&self) -> Result<BoxStream<'static, PlayerSignal>, MediaError> {
        let properties = fdo::PropertiesProxy::builder(&self.connection)
            .destination(self.id.bus_name().to_string())
            .map_err(MediaError::DbusError)?
            .path(MPRIS_OBJECT_PATH)
            .map_err(MediaError::DbusError)?
            .build()
            .await
            .map_err(MediaError::DbusError)?;

        let changes = properties.receive_properties_changed().await.map_err(|e| {
            MediaError::InitializationFailed(format!("Signal subscription failed: {e}"))
        })?;

        Ok(changes
            .filter_map(|signal| async move {
                let args = signal.args().ok()?;
                Some(PlayerSignal::PropertiesChanged {
                    interface: args.interface_name().to_string(),
                })
            })
            .boxed())
    }

    async fn seek_signals(&self) -> Result<BoxStream<'static, PlayerSignal>, MediaError> {
        let seeks = self
            .proxy
            .receive_seeked()
            .await
            .map_err(MediaError::DbusError)?;

        Ok(seeks
            .filter_map(|signal| async move {
                let args = signal.args().ok()?;
                Some(PlayerSignal::Seeked {
                    position: utils::from_mpris_micros(*args.position()),
                })
            })
            .boxed())
    }
}

#[async_trait]
impl PlayerControl for MprisPlayer {
    fn id(&self) -> &PlayerId {
        &self.id
    }

    async fn metadata(&self) -> Result<TrackMetadata, MediaError> {
        let metadata = self
            .proxy
            .metadata()
            .await
            .map_err(|e| MediaError::query(&self.id, "metadata", e))?;
        Ok(TrackMetadata::from(metadata))
    }

    async fn playback_status(&self) -> Result<PlaybackState, MediaError> {
        let status = self
            .proxy
            .playback_status()
            .await
            .map_err(|e| MediaError::query(&self.id, "playback status", e))?;
        Ok(PlaybackState::from(status.as_str()))
    }

    async fn volume(&self) -> Result<Volume, MediaError> {
        let volume = self
            .proxy
            .volume()
            .await
            .map_err(|e| MediaError::query(&self.id, "volume", e))?;
        Ok(Volume::new(volume))
    }

    async fn position(&self) -> Result<f64, MediaError> {
        let position = self
            .proxy
            .position()
            .await
            .map_err(|e| MediaError::query(&self.id, "position", e))?;
        Ok(utils::from_mpris_micros(position))
    }

    async fn set_position(&self, seconds: f64) -> Result<(), MediaError> {
        let track_id = self.metadata().await?.track_id;
        let track_path = track_id.as_deref().unwrap_or("/");
        let track_object_path = ObjectPath::try_from(track_path)
            .map_err(|e| MediaError::ControlFailed(format!("Invalid track ID: {e}")))?;

        self.proxy
            .set_position(&track_object_path, utils::to_mpris_micros(seconds))
            .await
            .map_err(|e| MediaError::ControlFailed(format!("Set position failed: {e}")))
    }

    async fn play_pause(&self) -> Result<(), MediaError> {
        self.proxy
            .play_pause()
            .await
            .map_err(|e| MediaError::ControlFailed(format!("Play/pause failed: {e}")))
    }

    async fn next(&self) -> Result<(), MediaError> {
        self.proxy
            .next()
            .await
            .map_err(|e| MediaError::ControlFailed(format!("Next failed: {e}")))
    }

    async fn previous(&self) -> Result<(), MediaError> {
        self.proxy
            .previous()
            .await
            .map_err(|e| MediaError::ControlFailed(format!("Previous failed: {e}")))
    }

    async fn set_volume(&self, volume: Volume) -> Result<(), MediaError> {
        self.proxy
            .set_volume(*volume)
            .await
            .map_err(|e| MediaError::ControlFailed(format!("Set volume failed: {e}")))
    }

    async fn signals(&self) -> Result<BoxStream<'static, PlayerSignal>, MediaError> {
        let streams = vec![
            self.name_owner_signals().await?,
            self.property_signals().await?,
            self.seek_signals().await?,
        ];

        Ok(futures::stream::select_all(streams).boxed())
    }
}
