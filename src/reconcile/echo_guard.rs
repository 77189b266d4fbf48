use std::collections::VecDeque;

/// Most displayed values awaiting their change notification.
const PENDING_LIMIT: usize = 8;

/// Tells programmatic position updates apart from user edits.
///
/// Holds the `ExpectedValue`: the last fraction this program computed and
/// displayed. Only [`EchoGuard::record`] writes it, and only the estimator
/// and authoritative reads call that. A "value changed" notification whose
/// value is bit-identical to it is an echo of our own write and is
/// dropped; anything else came from the user.
///
/// Notifications may lag behind the display when the widget lives in
/// another process. Values displayed since the last echo was consumed are
/// kept in a short queue and count as echoes too, so a late echo of an
/// older value never seeks.
///
/// A user drag that lands exactly on one of those values is
/// indistinguishable from an echo and is ignored.
#[derive(Debug, Default, Clone)]
pub struct EchoGuard {
    expected: f64,
    pending: VecDeque<f64>,
}

impl EchoGuard {
    /// Guard whose expected value is 0, matching a freshly created control.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current expected value.
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// Remember `value` as the one about to be displayed.
    pub fn record(&mut self, value: f64) {
        self.expected = value;
        if self.pending.len() == PENDING_LIMIT {
            self.pending.pop_front();
        }
        self.pending.push_back(value);
    }

    /// Whether `value` merely reflects a recorded value.
    pub fn is_echo(&self, value: f64) -> bool {
        value.to_bits() == self.expected.to_bits() || self.pending_index(value).is_some()
    }

    /// Consume one notification: the value to forward to the player, or
    /// `None` for an echo.
    ///
    /// Echoes arrive in display order, so an echo also retires every value
    /// displayed before the one it matches.
    pub fn admit(&mut self, value: f64) -> Option<f64> {
        if let Some(index) = self.pending_index(value) {
            self.pending.drain(..=index);
            return None;
        }
        (!self.is_echo(value)).then_some(value)
    }

    fn pending_index(&self, value: f64) -> Option<usize> {
        self.pending
            .iter()
            .position(|pending| pending.to_bits() == value.to_bits())
    }
}
