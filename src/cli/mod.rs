//! Command-line interface.
//!
//! `bar` and `progress` follow the best player until it exits or the
//! selection changes; the remaining commands are the one-shot actions the
//! bar's click and scroll affordances invoke.

mod args;
mod commands;
pub mod formatting;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use args::{Cli, Commands};
pub use service::CliService;
pub use types::{CliError, CommandResult};
