//! Lyric line output for the terminal player.
//!
//! The terminal is append-only here: each transition prints the newly active
//! line, and jumps are announced first so the reader sees the discontinuity.

use std::io::Write;
use std::sync::Arc;

use crossterm::style::Stylize;

use crate::player::controller::TransitionSink;
use crate::player::state::{TransitionEvent, TransitionKind};
use crate::timeline::{write_timestamp, Timeline};

use super::progress::format_duration;

/// Plain-text lines to print for a transition.
pub fn describe_transition(timeline: &Timeline, event: &TransitionEvent) -> Vec<String> {
    let Some(line) = timeline.get(event.new_index) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(2);
    if event.kind == TransitionKind::Jump && event.new_index != event.previous_index {
        out.push(format!("── jump to {} ──", format_duration(line.timestamp)));
    }
    let mut active = String::new();
    write_timestamp(&mut active, line.timestamp);
    active.push(' ');
    active.push_str(&line.text);
    out.push(active);
    out
}

/// Prints transitions to a writer, optionally styled.
pub struct LineRenderer<W: Write> {
    out: W,
    timeline: Arc<Timeline>,
    color: bool,
    /// Line terminator; raw-mode terminals need `\r\n`
    newline: &'static str,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W, timeline: Arc<Timeline>) -> Self {
        Self {
            out,
            timeline,
            color: false,
            newline: "\n",
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn raw_mode(mut self, raw: bool) -> Self {
        self.newline = if raw { "\r\n" } else { "\n" };
        self
    }

    fn write_line(&mut self, text: &str) {
        let result = write!(self.out, "{}{}", text, self.newline).and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write lyric line");
        }
    }
}

impl<W: Write> TransitionSink for LineRenderer<W> {
    fn notify(&mut self, event: &TransitionEvent) {
        let lines = describe_transition(&self.timeline, event);
        let count = lines.len();
        for (i, line) in lines.into_iter().enumerate() {
            let is_active = i + 1 == count;
            let styled = match (self.color, is_active) {
                (false, _) => line,
                (true, true) => line.bold().cyan().to_string(),
                (true, false) => line.dim().to_string(),
            };
            self.write_line(&styled);
        }
    }
}
