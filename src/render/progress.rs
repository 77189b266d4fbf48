use std::io::{self, Write};

use tracing::warn;

use crate::reconcile::ProgressView;

/// Prints each displayed fraction on its own line.
///
/// Uses the shortest representation that parses back to the same value,
/// so a widget echoing the line back is recognised as an echo.
pub struct StdoutProgressView<W = io::Stdout> {
    out: W,
}

impl StdoutProgressView {
    /// View writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdoutProgressView<W> {
    /// View writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ProgressView for StdoutProgressView<W> {
    fn set_value(&mut self, fraction: f64) {
        let written = writeln!(self.out, "{fraction}").and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!("Cannot write progress: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_are_printed_losslessly() {
        let mut view = StdoutProgressView::new(Vec::new());
        view.set_value(0.25);
        view.set_value(1.0 / 3.0);

        let printed = String::from_utf8(view.into_inner()).unwrap_or_default();
        let lines: Vec<f64> = printed.lines().filter_map(|l| l.parse().ok()).collect();
        assert_eq!(lines, vec![0.25, 1.0 / 3.0]);
    }
}
