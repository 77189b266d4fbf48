//! Event reconciliation between the active player and the front ends.
//!
//! The [`SignalRouter`] follows one player per run and turns its signals
//! into [`Snapshot`]s for a [`RenderSink`]. The [`ProgressControl`] keeps a
//! progress widget moving with a [`DriftEstimator`] and uses an
//! [`EchoGuard`] to tell its own writes apart from user seeks.

mod drift;
mod echo_guard;
mod progress;
mod router;
mod sink;
mod snapshot;

#[cfg(test)]
mod tests;

pub use drift::{DriftEstimator, expected_fraction};
pub use echo_guard::EchoGuard;
pub use progress::{ProgressControl, ProgressEvent, ProgressSink, ProgressView};
pub use router::{RouterOutcome, SignalRouter};
pub use sink::{RenderSink, SelectionAction};
pub use snapshot::Snapshot;
