//! Keyboard input handling for the terminal player.
//!
//! Maps key presses to player commands and applies them to the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::SyncError;
use crate::player::clock::PlaybackClock;
use crate::player::controller::{PlaybackController, TransitionSink};
use crate::player::state::InputResult;

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    TogglePause,
    /// Seek relative to the current position, in seconds
    SeekBy(f64),
    SeekToStart,
    SeekToEnd,
    /// Seek to a fraction of the duration
    SeekFraction(f64),
    ShowHelp,
    Quit,
}

/// Translate a key event into a command. Key releases are ignored.
pub fn command_for_key(key: KeyEvent, seek_step: f64) -> Option<PlayerCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => PlayerCommand::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => PlayerCommand::Quit,

        // === Playback ===
        KeyCode::Char(' ') => PlayerCommand::TogglePause,
        KeyCode::Char('?') => PlayerCommand::ShowHelp,

        // === Seeking ===
        KeyCode::Left | KeyCode::Char(',') | KeyCode::Char('<') => {
            PlayerCommand::SeekBy(-seek_step)
        }
        KeyCode::Right | KeyCode::Char('.') | KeyCode::Char('>') => {
            PlayerCommand::SeekBy(seek_step)
        }
        KeyCode::Home => PlayerCommand::SeekToStart,
        KeyCode::End => PlayerCommand::SeekToEnd,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let tenth = c.to_digit(10).unwrap_or(0);
            PlayerCommand::SeekFraction(f64::from(tenth) / 10.0)
        }

        _ => return None,
    };
    Some(command)
}

/// Apply a command to the controller.
pub fn apply_command<C, S>(
    command: PlayerCommand,
    controller: &mut PlaybackController<C, S>,
) -> Result<InputResult, SyncError>
where
    C: PlaybackClock,
    S: TransitionSink,
{
    match command {
        PlayerCommand::Quit => return Ok(InputResult::Quit),
        PlayerCommand::ShowHelp => return Ok(InputResult::ShowHelp),
        PlayerCommand::TogglePause => {
            controller.toggle_pause()?;
        }
        PlayerCommand::SeekBy(delta) => {
            let now = controller.clock().map_or(0.0, |clock| clock.current_time());
            let target = match controller.duration() {
                Some(duration) => (now + delta).clamp(0.0, duration.max(0.0)),
                None => (now + delta).max(0.0),
            };
            controller.seek(target)?;
        }
        PlayerCommand::SeekToStart => {
            controller.seek(0.0)?;
        }
        PlayerCommand::SeekToEnd => {
            controller.seek_to_line(usize::MAX)?;
        }
        PlayerCommand::SeekFraction(fraction) => {
            controller.seek_fraction(fraction)?;
        }
    }
    Ok(InputResult::ShowStatus)
}

/// Handle a keyboard event.
pub fn handle_key_event<C, S>(
    key: KeyEvent,
    controller: &mut PlaybackController<C, S>,
    seek_step: f64,
) -> Result<InputResult, SyncError>
where
    C: PlaybackClock,
    S: TransitionSink,
{
    match command_for_key(key, seek_step) {
        Some(command) => apply_command(command, controller),
        None => Ok(InputResult::Continue),
    }
}
