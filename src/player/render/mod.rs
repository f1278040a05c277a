//! Rendering components for the terminal player.
//!
//! Contains the transition printer, the progress/status line and the key help.

mod help;
mod lines;
mod progress;

pub use help::{HELP_BOX_WIDTH, HELP_LINES};
pub use lines::{describe_transition, LineRenderer};
pub use progress::{build_progress_bar_chars, format_duration, status_line};
