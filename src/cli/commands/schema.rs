use crate::{cli::CommandResult, config::Config};

/// Print the configuration file's JSON schema
///
/// # Errors
/// Returns CliError if the schema cannot be serialized
pub fn run() -> CommandResult {
    Ok(serde_json::to_string_pretty(&Config::schema())?)
}
