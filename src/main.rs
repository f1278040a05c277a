//! lyrsync command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lyrsync::cli::{Cli, Commands, ConfigCommands};
use lyrsync::Config;

/// Environment variable holding the log filter (e.g. `lyrsync=debug`).
const LOG_ENV: &str = "LYRSYNC_LOG";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Timeline { file, json } => {
            let config = Config::load()?;
            commands::timeline::handle(&file, json, &config)
        }
        Commands::Play(args) => {
            let config = Config::load()?;
            commands::play::handle(&args, &config)
        }
        Commands::Config { action } => match action {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
