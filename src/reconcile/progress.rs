use std::{io, sync::Arc, time::Duration};

use tokio::{sync::mpsc, time::MissedTickBehavior};
use tracing::{debug, instrument, warn};

use super::{DriftEstimator, EchoGuard, RenderSink, SelectionAction, Snapshot};
use crate::services::mpris::PlayerControl;

/// Widget showing playback progress as a fraction in `[0, 1]`.
pub trait ProgressView: Send {
    /// Display `fraction`. The widget may answer with a "value changed" notification.
    fn set_value(&mut self, fraction: f64);
}

/// Work item for [`ProgressControl`].
#[derive(Clone)]
pub enum ProgressEvent {
    /// Follow a newly selected player
    Attach(Arc<dyn PlayerControl>),
    /// Fresh duration and position from a reconciliation
    Authoritative {
        /// Position in seconds
        position: f64,
        /// Track length in seconds
        duration: f64,
    },
    /// Periodic estimator tick
    Tick,
    /// The widget reported a new value
    Changed(f64),
    /// Nothing meaningful to show
    Reset,
}

impl std::fmt::Debug for ProgressEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attach(player) => f.debug_tuple("Attach").field(player.id()).finish(),
            Self::Authoritative { position, duration } => f
                .debug_struct("Authoritative")
                .field("position", position)
                .field("duration", duration)
                .finish(),
            Self::Tick => f.write_str("Tick"),
            Self::Changed(value) => f.debug_tuple("Changed").field(value).finish(),
            Self::Reset => f.write_str("Reset"),
        }
    }
}

/// Bidirectional progress control.
///
/// All events are handled one at a time by a single task, so the echo
/// guard and the estimator are never touched concurrently. Every value
/// this control displays is recorded in the guard first; a change
/// notification carrying a recently displayed value is dropped, any other
/// one seeks the player.
pub struct ProgressControl<V> {
    guard: EchoGuard,
    estimator: DriftEstimator,
    player: Option<Arc<dyn PlayerControl>>,
    view: V,
}

impl<V: ProgressView> ProgressControl<V> {
    /// Control with no player, driving `view`.
    pub fn new(view: V) -> Self {
        Self {
            guard: EchoGuard::new(),
            estimator: DriftEstimator::new(),
            player: None,
            view,
        }
    }

    /// The echo guard's current expected value.
    pub fn expected(&self) -> f64 {
        self.guard.expected()
    }

    /// Handle one event to completion.
    pub async fn handle(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::Attach(player) => {
                debug!(player = %player.id(), "Progress follows new player");
                self.player = Some(player);
            }
            ProgressEvent::Authoritative { position, duration } => {
                if let Some(value) = self.estimator.on_authoritative(position, duration) {
                    self.display(value);
                }
            }
            ProgressEvent::Tick => {
                let Some(player) = self.player.clone() else {
                    return;
                };
                if let Some(value) = self.estimator.poll(player.as_ref()).await {
                    self.display(value);
                }
            }
            ProgressEvent::Changed(value) => self.on_changed(value).await,
            ProgressEvent::Reset => {
                self.estimator.reset();
                self.display(0.0);
            }
        }
    }

    /// Process events until the sending side closes, ticking every `poll_interval`.
    ///
    /// Queued events are drained before a pending tick is taken.
    #[instrument(skip_all, fields(poll_interval = ?poll_interval))]
    pub async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<ProgressEvent>,
        poll_interval: Duration,
    ) {
        let mut ticks = tokio::time::interval(poll_interval);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let event = tokio::select! {
                biased;

                event = events.recv() => match event {
                    Some(event) => event,
                    None => break,
                },
                _ = ticks.tick() => ProgressEvent::Tick,
            };

            self.handle(event).await;
        }

        debug!("Progress control stopped");
    }

    fn display(&mut self, value: f64) {
        self.guard.record(value);
        self.view.set_value(value);
    }

    async fn on_changed(&mut self, value: f64) {
        let Some(value) = self.guard.admit(value) else {
            return;
        };

        let Some(player) = self.player.clone() else {
            debug!("Ignoring progress change without a player");
            return;
        };

        let duration = self.estimator.duration();
        if duration <= 0.0 {
            debug!("Ignoring progress change for a track of unknown length");
            return;
        }

        let seconds = value.clamp(0.0, 1.0) * duration;
        debug!(seconds, "Seeking on user request");
        if let Err(e) = player.set_position(seconds).await {
            warn!("Cannot seek {}: {e}", player.id());
        }
    }
}

/// [`RenderSink`] feeding a [`ProgressControl`] through its event channel.
///
/// Stopped, idle, disabled and failed states all reset the control to 0.
pub struct ProgressSink {
    events: mpsc::UnboundedSender<ProgressEvent>,
}

impl ProgressSink {
    /// Sink forwarding to `events`.
    pub fn new(events: mpsc::UnboundedSender<ProgressEvent>) -> Self {
        Self { events }
    }

    fn send(&self, event: ProgressEvent) {
        if self.events.send(event).is_err() {
            debug!("Progress control is gone; dropping event");
        }
    }
}

impl RenderSink for ProgressSink {
    fn attach(&mut self, player: Arc<dyn PlayerControl>) {
        self.send(ProgressEvent::Attach(player));
    }

    fn render(&mut self, snapshot: &Snapshot, _action: &SelectionAction) -> io::Result<()> {
        if snapshot.is_stopped() {
            self.send(ProgressEvent::Reset);
        } else {
            self.send(ProgressEvent::Authoritative {
                position: snapshot.position,
                duration: snapshot.duration,
            });
        }
        Ok(())
    }

    fn render_selection_prompt(&mut self, _action: &SelectionAction) -> io::Result<()> {
        self.send(ProgressEvent::Reset);
        Ok(())
    }

    fn render_idle(&mut self) -> io::Result<()> {
        self.send(ProgressEvent::Reset);
        Ok(())
    }

    fn render_error(&mut self, _message: &str) -> io::Result<()> {
        self.send(ProgressEvent::Reset);
        Ok(())
    }
}
