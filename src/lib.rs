//! lyrsync - keep timestamped lyric lines in step with a playback clock
//!
//! The crate is built bottom-up from three pieces:
//!
//! - [`timeline`]: parses LRC-style `[mm:ss.xx]text` into an ordered,
//!   deduplicated [`Timeline`]
//! - [`sync`]: the [`SyncEngine`] cursor, advanced incrementally on regular
//!   clock updates and re-derived by search on seeks and discontinuities
//! - [`player`]: the [`PlaybackController`] that drives the engine from a clock
//!   and emits transition events to a renderer, plus a terminal player

pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod sync;
pub mod timeline;

pub use config::Config;
pub use error::SyncError;
pub use player::{LineState, PlaybackController, TransitionEvent};
pub use sync::{SyncEngine, Transition};
pub use timeline::{LyricLine, Timeline, TimelineOptions};
