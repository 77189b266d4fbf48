use std::io::{self, Write};

use tracing::debug;

use super::{
    icons,
    polybar::{self, Action, MouseButton, Underline},
    text,
};
use crate::{
    config::BarConfig,
    reconcile::{RenderSink, SelectionAction, Snapshot},
};

const ERROR_COLOR: &str = "#ff0000";
const IDLE_LINE: &str = "Nothing playing...";
const VOLUME_STEP: &str = "0.05";

/// Renders frames as polybar `custom/script` lines.
///
/// Every call writes exactly one line and flushes it, since polybar
/// replaces the module text line by line.
pub struct PolybarRenderer<W = io::Stdout> {
    out: W,
    bar: BarConfig,
}

impl PolybarRenderer {
    /// Renderer writing to standard output.
    pub fn stdout(bar: BarConfig) -> Self {
        Self::new(io::stdout(), bar)
    }
}

impl<W: Write> PolybarRenderer<W> {
    /// Renderer writing to `out`.
    pub fn new(out: W, bar: BarConfig) -> Self {
        Self { out, bar }
    }

    /// The underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Line for a full snapshot, without the trailing newline.
    pub fn format_snapshot(&self, snapshot: &Snapshot, action: &SelectionAction) -> String {
        let picker = Self::picker(action);
        let status = icons::for_state(snapshot.status);

        if snapshot.is_stopped() {
            return format!("{picker} {status}");
        }

        let previous = Action::new(MouseButton::Left, icons::PREVIOUS, self.command("prev"))
            .and(MouseButton::Right, self.command("position 0"));
        let play_pause = Action::new(MouseButton::Left, status, self.command("play-pause"));
        let next = Action::new(MouseButton::Left, icons::NEXT, self.command("next"));
        let volume = Action::new(
            MouseButton::ScrollUp,
            polybar::escape_text(&format!(
                "{} {:.0}%",
                icons::VOLUME,
                snapshot.volume.as_percentage()
            )),
            self.command(&format!("volume +{VOLUME_STEP}")),
        )
        .and(
            MouseButton::ScrollDown,
            self.command(&format!("volume -{VOLUME_STEP}")),
        );

        format!(
            "{picker} {} {previous} {play_pause} {next} {volume}",
            self.full_title(snapshot)
        )
    }

    /// `<title>[ from <artist>]`, each part decoded, size-limited and escaped.
    pub fn full_title(&self, snapshot: &Snapshot) -> String {
        let title = polybar::escape_text(&text::label(&snapshot.title, self.bar.max_title_size));
        let artist =
            polybar::escape_text(&text::label(&snapshot.artist, self.bar.max_artist_size));

        if artist.is_empty() {
            title
        } else {
            format!("{title} from {artist}")
        }
    }

    fn picker(action: &SelectionAction) -> Action {
        Action::new(MouseButton::Left, icons::MENU, action.as_str())
    }

    fn command(&self, subcommand: &str) -> String {
        format!("{} {subcommand}", self.bar.command)
    }

    fn line(&mut self, line: &str) -> io::Result<()> {
        debug!(line, "Bar frame");
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

impl<W: Write + Send> RenderSink for PolybarRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot, action: &SelectionAction) -> io::Result<()> {
        let line = self.format_snapshot(snapshot, action);
        self.line(&line)
    }

    fn render_selection_prompt(&mut self, action: &SelectionAction) -> io::Result<()> {
        let line = Self::picker(action).to_string();
        self.line(&line)
    }

    fn render_idle(&mut self) -> io::Result<()> {
        self.line(IDLE_LINE)
    }

    fn render_error(&mut self, message: &str) -> io::Result<()> {
        let line = Underline {
            color: ERROR_COLOR,
            text: message,
        }
        .to_string();
        self.line(&line)
    }
}
