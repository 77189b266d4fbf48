use tracing::instrument;

use super::{Commands, CommandResult, commands};
use crate::config::Config;

/// Runs commands against one loaded configuration.
pub struct CliService {
    config: Config,
}

impl CliService {
    /// Service using `config` for every command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration commands run with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Executes `command`, returning its stdout text.
    ///
    /// # Errors
    /// Returns `CliError` if the command fails; follow runs have already
    /// shown the failure on their own output by then.
    #[instrument(skip(self))]
    pub async fn execute(&self, command: Commands) -> CommandResult {
        let config = &self.config;

        match command {
            Commands::Bar { select_command } => commands::follow::bar(config, select_command).await,
            Commands::Progress => commands::follow::progress(config).await,
            Commands::PlayPause => commands::transport::play_pause(config).await,
            Commands::Next => commands::transport::next(config).await,
            Commands::Prev => commands::transport::previous(config).await,
            Commands::Position { seconds } => commands::transport::position(config, seconds).await,
            Commands::Volume { delta } => commands::transport::volume(config, delta).await,
            Commands::Select {
                name,
                disable,
                clear,
            } => commands::select::run(name, disable, clear),
            Commands::List => commands::list::run(config).await,
            Commands::Schema => commands::schema::run(),
        }
    }
}
