//! Play subcommand handler

use anyhow::{bail, Result};

use lyrsync::cli::PlayArgs;
use lyrsync::player::{play_session, PlaybackResult, SessionOptions};
use lyrsync::Config;

/// Play a lyrics file in the terminal.
///
/// Keys are only read when both stdin and stdout are terminals; piped runs
/// play straight through.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config) -> Result<()> {
    if !(args.speed.is_finite() && args.speed > 0.0) {
        bail!("--speed must be a positive number (got {})", args.speed);
    }
    if let Some(duration) = args.duration {
        if !(duration.is_finite() && duration > 0.0) {
            bail!("--duration must be a positive number (got {})", duration);
        }
    }

    let tty = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);
    let options = SessionOptions {
        start: args.start,
        speed: args.speed,
        duration: args.duration,
        interactive: tty,
        color: tty && std::env::var_os("NO_COLOR").is_none(),
    };

    match play_session(&args.file, &options, config)? {
        PlaybackResult::Finished | PlaybackResult::Untimed => {}
        PlaybackResult::Interrupted => eprintln!("Playback stopped"),
    }
    Ok(())
}
