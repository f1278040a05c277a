//! Terminal lyric player.
//!
//! Drives a [`PlaybackController`] from a [`WallClock`], printing each line as
//! it becomes active. With an interactive terminal, keys control playback;
//! otherwise playback runs to the end or until Ctrl-C.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::terminal;

use crate::config::Config;
use crate::error::SyncError;
use crate::player::clock::{PlaybackClock, WallClock};
use crate::player::controller::PlaybackController;
use crate::player::input::handle_event;
use crate::player::render::{status_line, LineRenderer, HELP_LINES};
use crate::player::state::InputResult;
use crate::timeline::{untimed_lines, Timeline};

/// Width of the progress bar in the status line.
const STATUS_BAR_WIDTH: usize = 40;

/// How a playback session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Reached the end of the lyrics
    Finished,
    /// Stopped by the user
    Interrupted,
    /// The file had no timestamp tags; its text was printed untimed
    Untimed,
}

/// Options for a playback session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Start position in seconds
    pub start: f64,
    pub speed: f64,
    /// Media length; defaults to the last line plus `linger`
    pub duration: Option<f64>,
    /// Read keys from the terminal (requires a TTY)
    pub interactive: bool,
    /// Style output with ANSI colors
    pub color: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            speed: 1.0,
            duration: None,
            interactive: false,
            color: false,
        }
    }
}

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Load a lyrics file and play it on stdout.
pub fn play_session(path: &Path, options: &SessionOptions, config: &Config) -> Result<PlaybackResult> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lyrics file: {}", path.display()))?;
    play_source(&source, path.to_path_buf(), options, config)
}

fn play_source(
    source: &str,
    path: PathBuf,
    options: &SessionOptions,
    config: &Config,
) -> Result<PlaybackResult> {
    let timeline = match Timeline::try_build_with(source, &config.timeline_options()) {
        Ok(timeline) => Arc::new(timeline),
        Err(SyncError::ParseEmpty) => {
            print_untimed(source, &path)?;
            return Ok(PlaybackResult::Untimed);
        }
        Err(e) => return Err(e.into()),
    };

    let end_time = options
        .duration
        .unwrap_or_else(|| timeline.duration_hint() + config.player.linger);
    let mut clock = WallClock::new()
        .with_speed(options.speed)
        .with_duration(Some(end_time));
    // Positioned before attaching; play() re-derives the cursor from it.
    clock.seek(SyncError::check_time(options.start)?);
    let renderer = LineRenderer::new(io::stdout(), timeline.clone())
        .with_color(options.color)
        .raw_mode(options.interactive);

    let mut controller = PlaybackController::new(clock, renderer)
        .with_linear_threshold(config.sync.linear_scan_threshold);
    controller.attach(timeline.clone());

    tracing::info!(
        file = %path.display(),
        lines = timeline.len(),
        end_time,
        interactive = options.interactive,
        "Starting playback"
    );

    let result = if options.interactive {
        let _raw = RawModeGuard::enable()?;
        run_interactive(&mut controller, &timeline, config)
    } else {
        run_plain(&mut controller, config)
    };
    controller.destroy();
    result
}

fn run_plain(
    controller: &mut PlaybackController<WallClock, LineRenderer<io::Stdout>>,
    config: &Config,
) -> Result<PlaybackResult> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        tracing::warn!(error = %e, "Could not install Ctrl-C handler");
    }

    controller.play()?;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            return Ok(PlaybackResult::Interrupted);
        }
        controller.sync_to_clock()?;
        if reached_end(controller) {
            return Ok(PlaybackResult::Finished);
        }
        thread::sleep(config.player.tick_interval());
    }
}

fn run_interactive(
    controller: &mut PlaybackController<WallClock, LineRenderer<io::Stdout>>,
    timeline: &Timeline,
    config: &Config,
) -> Result<PlaybackResult> {
    print_raw("Press ? for keys, q to quit")?;
    controller.play()?;
    let tick = config.player.tick_interval();

    loop {
        if event::poll(tick).context("Failed to poll terminal events")? {
            let ev = event::read().context("Failed to read terminal event")?;
            match handle_event(ev, controller, config.player.seek_step)? {
                InputResult::Quit => return Ok(PlaybackResult::Interrupted),
                InputResult::ShowHelp => {
                    for line in HELP_LINES {
                        print_raw(line)?;
                    }
                }
                InputResult::ShowStatus => {
                    if let (Some(clock), Some(duration)) = (controller.clock(), controller.duration()) {
                        let line = status_line(
                            clock.is_paused(),
                            clock.current_time(),
                            duration,
                            timeline,
                            STATUS_BAR_WIDTH,
                        );
                        print_raw(&line)?;
                    }
                }
                InputResult::Continue => {}
            }
        }

        controller.sync_to_clock()?;
        if reached_end(controller) {
            return Ok(PlaybackResult::Finished);
        }
    }
}

fn reached_end(controller: &PlaybackController<WallClock, LineRenderer<io::Stdout>>) -> bool {
    match (controller.clock(), controller.duration()) {
        (Some(clock), Some(duration)) => !clock.is_paused() && clock.current_time() >= duration,
        _ => true,
    }
}

fn print_raw(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}\r\n", text)?;
    stdout.flush()?;
    Ok(())
}

fn print_untimed(source: &str, path: &Path) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "No synchronized lyrics in {}, showing text only:",
        path.display()
    )?;
    for line in untimed_lines(source) {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}
