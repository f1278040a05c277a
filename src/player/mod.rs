//! Lyric playback
//!
//! Connects a playback clock to the sync engine and reports line transitions:
//!
//! - `controller`: [`PlaybackController`] with play/pause/seek/destroy
//! - `clock`: [`PlaybackClock`] trait and the [`WallClock`] implementation
//! - `state`: line classification and transition event types
//! - `input/`: keyboard handling for the terminal player
//! - `render/`: terminal output (active lines, status line, key help)
//! - `native`: the terminal player session loop
//!
//! # Usage
//!
//! ```
//! use lyrsync::player::{PlaybackController, TransitionEvent, WallClock};
//! use lyrsync::Timeline;
//!
//! let timeline = Timeline::build("[00:00.00]a\n[00:01.50]b\n[00:05.00]c");
//! let mut controller = PlaybackController::new(WallClock::new(), |event: &TransitionEvent| {
//!     println!("line {} -> {}", event.previous_index, event.new_index);
//! });
//! controller.attach(timeline);
//! controller.tick(1.6).unwrap();
//! assert_eq!(controller.active_line().unwrap().text, "b");
//! ```

pub mod clock;
pub mod controller;
pub mod input;
mod native;
pub mod render;
pub mod state;

pub use clock::{PlaybackClock, WallClock};
pub use controller::{PlaybackController, TransitionSink};
pub use native::{play_session, PlaybackResult, SessionOptions};
pub use state::{
    classify_all, InputResult, LineChange, LineState, TransitionEvent, TransitionKind,
};
