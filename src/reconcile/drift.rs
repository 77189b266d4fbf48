use tracing::{debug, warn};

use crate::services::mpris::PlayerControl;

/// Consecutive failed polls between two warnings.
const FAILURE_WARN_EVERY: u32 = 10;

/// Position as a fraction of `duration`, clamped to `[0, 1]`.
///
/// `None` when the duration is unknown (zero) or either value is not finite.
pub fn expected_fraction(position: f64, duration: f64) -> Option<f64> {
    if !(duration > 0.0) || !duration.is_finite() || !position.is_finite() {
        return None;
    }

    Some((position / duration).clamp(0.0, 1.0))
}

/// Keeps the progress control moving between authoritative updates.
///
/// Tracks the last known duration and position. Authoritative snapshots
/// refresh both; periodic polls refresh the position only. Poll failures
/// are swallowed: the tick is skipped and the next one tries again.
#[derive(Debug, Default)]
pub struct DriftEstimator {
    duration: f64,
    last_known_position: f64,
    consecutive_failures: u32,
}

impl DriftEstimator {
    /// Estimator with unknown duration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Duration in seconds, 0 when unknown.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Position from the most recent successful read.
    pub fn last_known_position(&self) -> f64 {
        self.last_known_position
    }

    /// Current expected value, if the duration is known.
    pub fn expected(&self) -> Option<f64> {
        expected_fraction(self.last_known_position, self.duration)
    }

    /// Take a fresh duration and position from an authoritative update.
    pub fn on_authoritative(&mut self, position: f64, duration: f64) -> Option<f64> {
        self.duration = duration.max(0.0);
        self.observe_position(position)
    }

    /// Record a freshly read position.
    pub fn observe_position(&mut self, position: f64) -> Option<f64> {
        self.last_known_position = position.max(0.0);
        self.consecutive_failures = 0;
        self.expected()
    }

    /// Forget everything, as when the player stops.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read the authoritative position from `player` and return the new expected value.
    ///
    /// Returns `None` when the read fails or the duration is unknown.
    pub async fn poll(&mut self, player: &dyn PlayerControl) -> Option<f64> {
        match player.position().await {
            Ok(position) => self.observe_position(position),
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                debug!("Skipping position poll: {e}");

                if self.consecutive_failures % FAILURE_WARN_EVERY == 0 {
                    warn!(
                        failures = self.consecutive_failures,
                        "Position polling keeps failing for {}",
                        player.id()
                    );
                }
                None
            }
        }
    }
}
