//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use once_cell::sync::Lazy;

static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("release");
    let date = option_env!("LYRSYNC_BUILD_DATE").unwrap_or("unknown");
    format!("{} ({} {})", env!("CARGO_PKG_VERSION"), sha, date)
});

/// Version string with commit hash and build date.
pub fn long_version() -> &'static str {
    LONG_VERSION.as_str()
}

/// Lyric synchronizer - play LRC lyrics in step with a clock
#[derive(Debug, Parser)]
#[command(name = "lyrsync", version, long_version = long_version())]
pub struct Cli {
    /// Enable debug logging (overrides LYRSYNC_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the parsed timeline of a lyrics file
    Timeline {
        /// LRC lyrics file
        file: PathBuf,

        /// Output JSON instead of LRC text
        #[arg(long)]
        json: bool,
    },

    /// Play a lyrics file, highlighting each line as its time comes
    Play(PlayArgs),

    /// Show or initialize the configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// LRC lyrics file
    pub file: PathBuf,

    /// Start position in seconds
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Playback speed multiplier (0.1 - 16)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Media length in seconds (defaults to the last line plus linger time)
    #[arg(long)]
    pub duration: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration file if none exists
    Init,
}
