use clap::{Parser, Subcommand};

/// MPRIS media controls for status bars and progress widgets.
#[derive(Parser, Debug)]
#[command(name = "mediabar", version, about)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Every mediabar command.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Follow the best player and print one polybar line per change
    Bar {
        /// Command the player-picker button runs
        #[arg(long)]
        select_command: String,
    },

    /// Follow the best player and print its progress; read seeks from stdin
    Progress,

    /// Toggle play/pause on the best player
    PlayPause,

    /// Skip to the next track
    Next,

    /// Go back to the previous track
    Prev,

    /// Jump to an absolute position
    Position {
        /// Position in seconds
        seconds: f64,
    },

    /// Change the volume by a relative amount
    Volume {
        /// Change in the `[0, 1]` range, e.g. `+0.05` or `-0.05`
        #[arg(allow_negative_numbers = true)]
        delta: f64,
    },

    /// Choose which player to follow
    Select {
        /// Short name of the preferred player, e.g. `mpv`
        #[arg(required_unless_present_any = ["disable", "clear"])]
        name: Option<String>,

        /// Follow no player and show the picker instead
        #[arg(long, conflicts_with_all = ["name", "clear"])]
        disable: bool,

        /// Forget the preferred player
        #[arg(long, conflicts_with = "name")]
        clear: bool,
    },

    /// List running players
    List,

    /// Print the JSON schema of the configuration file
    Schema,
}

impl Commands {
    /// Whether the command keeps running and should log to a file.
    pub fn is_long_running(&self) -> bool {
        matches!(self, Self::Bar { .. } | Self::Progress)
    }
}
