use std::sync::Arc;

use futures::{StreamExt, stream::BoxStream};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use super::{RenderSink, SelectionAction, Snapshot};
use crate::{
    core::{MediabarError, Result},
    selection::SelectionEvent,
    services::mpris::{MediaError, PlayerControl, PlayerSelector, PlayerSignal},
};

/// Why a router run ended.
///
/// Every outcome except an error means the caller should start a new run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterOutcome {
    /// Selection is disabled; the picker prompt was shown
    Disabled,
    /// No player is running; the idle line was shown
    Idle,
    /// The followed player left the bus or its signal stream ended
    PlayerExited,
    /// The preferred-player selection changed
    SelectionChanged,
}

/// Routes player and selection events into renders.
///
/// One run follows one player: `Selecting` picks it, `Active` reconciles
/// after every signal it emits, and the run ends on the first terminal
/// event. Events are handled strictly one after another; a selection change
/// pending at the same time as a player signal wins.
pub struct SignalRouter<S, R> {
    selector: S,
    sink: R,
    selection_events: mpsc::UnboundedReceiver<SelectionEvent>,
}

impl<S: PlayerSelector, R: RenderSink> SignalRouter<S, R> {
    /// Router picking players from `selector` and rendering into `sink`.
    pub fn new(
        selector: S,
        sink: R,
        selection_events: mpsc::UnboundedReceiver<SelectionEvent>,
    ) -> Self {
        Self {
            selector,
            sink,
            selection_events,
        }
    }

    /// Perform one run.
    ///
    /// # Errors
    ///
    /// Returns error if players cannot be enumerated, the subscription
    /// fails, any reconciliation query fails, or a frame cannot be written.
    /// The operator-visible error frame has already been rendered then.
    #[instrument(skip_all)]
    pub async fn start(mut self, action: &SelectionAction) -> Result<RouterOutcome> {
        debug!("Selecting player");

        let player = match self.selector.best_player().await {
            Ok(Some(player)) => player,
            Ok(None) => {
                info!("No player running");
                self.sink.render_idle()?;
                return Ok(RouterOutcome::Idle);
            }
            Err(MediaError::SelectionDisabled) => {
                self.sink.render_selection_prompt(action)?;
                return Ok(RouterOutcome::Disabled);
            }
            Err(e) => {
                return Err(report(&mut self.sink, "Cannot get best player", e.into()));
            }
        };

        info!(player = %player.id(), "Following player");
        self.sink.attach(Arc::clone(&player));

        reconcile(&mut self.sink, player.as_ref(), action).await?;

        let signals = match player.signals().await {
            Ok(signals) => signals,
            Err(e) => {
                return Err(report(
                    &mut self.sink,
                    "Cannot listen to player signals",
                    e.into(),
                ));
            }
        };

        self.follow(player, signals, action).await
    }

    async fn follow(
        self,
        player: Arc<dyn PlayerControl>,
        mut signals: BoxStream<'static, PlayerSignal>,
        action: &SelectionAction,
    ) -> Result<RouterOutcome> {
        let Self {
            mut sink,
            mut selection_events,
            ..
        } = self;
        let mut selection_open = true;

        loop {
            tokio::select! {
                biased;

                event = selection_events.recv(), if selection_open => match event {
                    Some(event) => {
                        info!(path = %event.path.display(), "Player selection changed");
                        return Ok(RouterOutcome::SelectionChanged);
                    }
                    None => {
                        warn!("Selection watcher stopped; selection changes are no longer noticed");
                        selection_open = false;
                    }
                },

                signal = signals.next() => match signal {
                    Some(signal) if signal.is_exit_of(player.id()) => {
                        info!(player = %player.id(), "Player exited");
                        return Ok(RouterOutcome::PlayerExited);
                    }
                    Some(signal) => {
                        debug!(?signal, "Player signal");
                        reconcile(&mut sink, player.as_ref(), action).await?;
                    }
                    None => {
                        info!(player = %player.id(), "Player signal stream ended");
                        return Ok(RouterOutcome::PlayerExited);
                    }
                },
            }
        }
    }
}

/// Re-query the player and render the result, or render the error.
async fn reconcile<R: RenderSink>(
    sink: &mut R,
    player: &dyn PlayerControl,
    action: &SelectionAction,
) -> Result<()> {
    match Snapshot::query(player).await {
        Ok(snapshot) => {
            sink.render(&snapshot, action)?;
            Ok(())
        }
        Err(e) => {
            let message = operator_message(&e);
            Err(report(sink, &message, e.into()))
        }
    }
}

fn operator_message(error: &MediaError) -> String {
    match error {
        MediaError::QueryFailed { property, .. } => format!("Cannot get player {property}"),
        other => other.to_string(),
    }
}

/// Log `error` and show `message` to the operator, returning `error`.
fn report<R: RenderSink>(sink: &mut R, message: &str, error: MediabarError) -> MediabarError {
    error!("{message}: {error}");

    if let Err(e) = sink.render_error(message) {
        warn!("Cannot display error: {e}");
    }
    error
}
