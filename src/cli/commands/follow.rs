use futures::StreamExt;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

use super::selector;
use crate::{
    cli::{CliError, CommandResult},
    config::Config,
    reconcile::{
        ProgressControl, ProgressEvent, ProgressSink, RenderSink, SelectionAction, SignalRouter,
    },
    render::{PolybarRenderer, StdoutProgressView},
    selection::SelectionWatcher,
};

/// One bar run: follow the best player, printing polybar lines
///
/// # Errors
/// Returns CliError if the run fails; the error line has been printed
#[instrument(skip(config))]
pub async fn bar(config: &Config, select_command: String) -> CommandResult {
    let mut renderer = PolybarRenderer::stdout(config.bar.clone());

    let selector = match selector(config).await {
        Ok(selector) => selector,
        Err(e) => return Err(shown(&mut renderer, "Cannot connect to session bus", e)),
    };
    let (_watcher, selection_events) = match SelectionWatcher::start(selector.store()) {
        Ok(watching) => watching,
        Err(e) => return Err(shown(&mut renderer, "Cannot watch player selection", e.into())),
    };

    let outcome = SignalRouter::new(selector, renderer, selection_events)
        .start(&SelectionAction::new(select_command))
        .await?;

    info!(?outcome, "Bar run finished");
    Ok(String::new())
}

/// One progress run: follow the best player, printing progress fractions
///
/// Lines read from stdin are the widget's "value changed" notifications.
///
/// # Errors
/// Returns CliError if the run fails
#[instrument(skip(config))]
pub async fn progress(config: &Config) -> CommandResult {
    let selector = selector(config).await?;
    let (_watcher, selection_events) = SelectionWatcher::start(selector.store())?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let control = ProgressControl::new(StdoutProgressView::stdout());
    let control_task = tokio::spawn(control.run(events_rx, config.progress.poll_interval()));
    let stdin_task = tokio::spawn(forward_stdin(events_tx.clone()));

    // the progress widget has no picker
    let outcome = SignalRouter::new(selector, ProgressSink::new(events_tx), selection_events)
        .start(&SelectionAction::new(String::new()))
        .await;

    stdin_task.abort();
    let _ = stdin_task.await;
    if let Err(e) = control_task.await {
        warn!("Progress control ended abnormally: {e}");
    }

    let outcome = outcome?;
    info!(?outcome, "Progress run finished");
    Ok(String::new())
}

/// Forward numeric stdin lines as change notifications until stdin closes.
async fn forward_stdin(events: mpsc::UnboundedSender<ProgressEvent>) {
    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Cannot read progress input: {e}");
                break;
            }
        };

        match parse_fraction(&line) {
            Some(value) => {
                if events.send(ProgressEvent::Changed(value)).is_err() {
                    break;
                }
            }
            None => debug!("Ignoring progress input {line:?}"),
        }
    }

    debug!("Progress input closed");
}

/// A finite fraction from one input line, clamped to `[0, 1]`.
pub(crate) fn parse_fraction(line: &str) -> Option<f64> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 1.0))
}

fn shown<R: RenderSink>(sink: &mut R, message: &str, error: CliError) -> CliError {
    if let Err(e) = sink.render_error(message) {
        warn!("Cannot display error: {e}");
    }
    error
}
