//! Router and progress-control scenarios against in-memory players.

#![allow(clippy::unwrap_used)]


use std::{
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use futures::{
    StreamExt,
    stream::{self, BoxStream},
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use super::{ProgressView, RenderSink, SelectionAction, Snapshot};
use crate::services::mpris::{
    MediaError, PlaybackState, PlayerControl, PlayerId, PlayerSelector, PlayerSignal,
    TrackMetadata, Volume,
};

struct FakeState {
    metadata: TrackMetadata,
    status: PlaybackState,
    volume: Volume,
    position: f64,
    failing: Option<&'static str>,
    seeks: Vec<f64>,
}

/// Player whose answers are set by the test and whose signals are pushed by hand.
pub(super) struct FakePlayer {
    id: PlayerId,
    state: Mutex<FakeState>,
    signals: Mutex<Option<mpsc::UnboundedReceiver<PlayerSignal>>>,
}

impl FakePlayer {
    pub(super) fn new(
        name: &str,
        length: f64,
        position: f64,
    ) -> (Arc<Self>, mpsc::UnboundedSender<PlayerSignal>) {
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();
        let player = Self {
            id: PlayerId::from_short_name(name),
            state: Mutex::new(FakeState {
                metadata: TrackMetadata {
                    title: "Song".to_string(),
                    artist: "Band".to_string(),
                    length,
                    track_id: Some("/track/1".to_string()),
                },
                status: PlaybackState::Playing,
                volume: Volume::new(0.5),
                position,
                failing: None,
                seeks: Vec::new(),
            }),
            signals: Mutex::new(Some(signal_rx)),
        };
        (Arc::new(player), signal_tx)
    }

    pub(super) fn fail(&self, property: &'static str) {
        self.state.lock().unwrap().failing = Some(property);
    }

    pub(super) fn set_position_value(&self, position: f64) {
        self.state.lock().unwrap().position = position;
    }

    pub(super) fn set_status(&self, status: PlaybackState) {
        self.state.lock().unwrap().status = status;
    }

    pub(super) fn seeks(&self) -> Vec<f64> {
        self.state.lock().unwrap().seeks.clone()
    }

    fn read<T>(
        &self,
        property: &'static str,
        get: impl FnOnce(&FakeState) -> T,
    ) -> Result<T, MediaError> {
        let state = self.state.lock().unwrap();
        if state.failing == Some(property) {
            return Err(MediaError::query(&self.id, property, "no reply"));
        }
        Ok(get(&state))
    }
}

#[async_trait]
impl PlayerControl for FakePlayer {
    fn id(&self) -> &PlayerId {
        &self.id
    }

    async fn metadata(&self) -> Result<TrackMetadata, MediaError> {
        self.read("metadata", |state| state.metadata.clone())
    }

    async fn playback_status(&self) -> Result<PlaybackState, MediaError> {
        self.read("playback status", |state| state.status)
    }

    async fn volume(&self) -> Result<Volume, MediaError> {
        self.read("volume", |state| state.volume)
    }

    async fn position(&self) -> Result<f64, MediaError> {
        self.read("position", |state| state.position)
    }

    async fn set_position(&self, seconds: f64) -> Result<(), MediaError> {
        self.state.lock().unwrap().seeks.push(seconds);
        Ok(())
    }

    async fn play_pause(&self) -> Result<(), MediaError> {
        Ok(())
    }

    async fn next(&self) -> Result<(), MediaError> {
        Ok(())
    }

    async fn previous(&self) -> Result<(), MediaError> {
        Ok(())
    }

    async fn set_volume(&self, volume: Volume) -> Result<(), MediaError> {
        self.state.lock().unwrap().volume = volume;
        Ok(())
    }

    async fn signals(&self) -> Result<BoxStream<'static, PlayerSignal>, MediaError> {
        match self.signals.lock().unwrap().take() {
            Some(rx) => Ok(UnboundedReceiverStream::new(rx).boxed()),
            None => Ok(stream::empty().boxed()),
        }
    }
}

/// What [`FakeSelector`] answers.
pub(super) enum Choice {
    Player(Arc<FakePlayer>),
    Idle,
    Disabled,
    Broken,
}

pub(super) struct FakeSelector(pub(super) Choice);

#[async_trait]
impl PlayerSelector for FakeSelector {
    async fn best_player(&self) -> Result<Option<Arc<dyn PlayerControl>>, MediaError> {
        match &self.0 {
            Choice::Player(player) => Ok(Some(Arc::clone(player) as Arc<dyn PlayerControl>)),
            Choice::Idle => Ok(None),
            Choice::Disabled => Err(MediaError::SelectionDisabled),
            Choice::Broken => Err(MediaError::InitializationFailed("bus is down".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Frame {
    Attached(PlayerId),
    Rendered(Snapshot),
    Prompt(String),
    Idle,
    Error(String),
}

/// Sink recording every call; the frames stay readable after the router consumed it.
#[derive(Default, Clone)]
pub(super) struct RecordingSink {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl RecordingSink {
    pub(super) fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    pub(super) fn renders(&self) -> usize {
        self.frames()
            .iter()
            .filter(|frame| matches!(frame, Frame::Rendered(_)))
            .count()
    }

    fn push(&self, frame: Frame) {
        self.frames.lock().unwrap().push(frame);
    }
}

impl RenderSink for RecordingSink {
    fn attach(&mut self, player: Arc<dyn PlayerControl>) {
        self.push(Frame::Attached(player.id().clone()));
    }

    fn render(&mut self, snapshot: &Snapshot, _action: &SelectionAction) -> io::Result<()> {
        self.push(Frame::Rendered(snapshot.clone()));
        Ok(())
    }

    fn render_selection_prompt(&mut self, action: &SelectionAction) -> io::Result<()> {
        self.push(Frame::Prompt(action.to_string()));
        Ok(())
    }

    fn render_idle(&mut self) -> io::Result<()> {
        self.push(Frame::Idle);
        Ok(())
    }

    fn render_error(&mut self, message: &str) -> io::Result<()> {
        self.push(Frame::Error(message.to_string()));
        Ok(())
    }
}

/// Progress widget remembering every value it was given.
#[derive(Default, Clone)]
pub(super) struct RecordingView {
    values: Arc<Mutex<Vec<f64>>>,
}

impl RecordingView {
    pub(super) fn values(&self) -> Vec<f64> {
        self.values.lock().unwrap().clone()
    }

    pub(super) fn last(&self) -> Option<f64> {
        self.values().last().copied()
    }
}

impl ProgressView for RecordingView {
    fn set_value(&mut self, fraction: f64) {
        self.values.lock().unwrap().push(fraction);
    }
}
