//! Input handling for the terminal player.
//!
//! Dispatches crossterm events to the keyboard handler and returns control
//! flow signals.

mod keyboard;

pub use keyboard::{apply_command, command_for_key, handle_key_event, PlayerCommand};

use crossterm::event::Event;

use crate::error::SyncError;
use crate::player::clock::PlaybackClock;
use crate::player::controller::{PlaybackController, TransitionSink};
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event<C, S>(
    event: Event,
    controller: &mut PlaybackController<C, S>,
    seek_step: f64,
) -> Result<InputResult, SyncError>
where
    C: PlaybackClock,
    S: TransitionSink,
{
    match event {
        Event::Key(key) => handle_key_event(key, controller, seek_step),
        _ => Ok(InputResult::Continue), // Ignore mouse, focus and resize events
    }
}
