//! mediabar - MPRIS media controls for status bars
//!
//! Exits with status 0 when a run or command completes, 1 on failure.

use std::process;

use clap::Parser;
use mediabar::{
    cli::{Cli, CliService, Commands, formatting::format_error},
    config::{BarConfig, Config},
    reconcile::RenderSink,
    render::PolybarRenderer,
    tracing_config,
};
use tracing::{Level, info, span};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            if matches!(cli.command, Commands::Bar { .. }) {
                let mut renderer = PolybarRenderer::stdout(BarConfig::default());
                let _ = renderer.render_error("Invalid config");
            }
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    init_logging(&cli.command, &config);

    let _span = cli
        .command
        .is_long_running()
        .then(|| span!(Level::INFO, "mediabar").entered());
    if cli.command.is_long_running() {
        info!("Starting mediabar");
    }

    let service = CliService::new(config);
    let code = match service.execute(cli.command).await {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            1
        }
    };

    // stdin readers may still block; exiting directly avoids waiting on them
    process::exit(code);
}

fn init_logging(command: &Commands, config: &Config) {
    let level = config.general.log_level;

    let initialized = if command.is_long_running() {
        tracing_config::init_with_file(level).or_else(|e| {
            eprintln!("{}", format_error(&format!("File logging unavailable: {e}")));
            tracing_config::init_cli_mode(level)
        })
    } else {
        tracing_config::init_cli_mode(level)
    };

    if let Err(e) = initialized {
        eprintln!("{}", format_error(&format!("Cannot initialize logging: {e}")));
    }
}
