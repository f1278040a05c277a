//! Cursor synchronization against a playback clock.
//!
//! [`SyncEngine`] owns a timeline and a single cursor (`current_index`) and
//! keeps it consistent with incoming time values:
//!
//! ```text
//! timeline[current].timestamp <= time
//!     && (current is last || time < timeline[current + 1].timestamp)
//! ```
//!
//! Two strategies maintain this:
//! - **incremental**: time moved into exactly the next line, so the cursor
//!   steps forward by one in O(1);
//! - **hard search**: anything else (backward moves, skips over several
//!   lines, seeks) re-derives the cursor by searching the whole timeline.
//!
//! The cursor only moves backward through the hard search.

mod search;

use std::sync::Arc;

use crate::error::SyncError;
use crate::timeline::Timeline;

pub use search::{find_line_index_at_time, DEFAULT_LINEAR_SCAN_THRESHOLD};

/// Outcome of feeding a time value to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Cursor unchanged
    NoChange,
    /// Cursor stepped forward by this many lines (incremental path)
    AdvancedBy(usize),
    /// Cursor re-derived by search and now points at this index
    JumpedTo(usize),
}

impl Transition {
    pub fn is_change(&self) -> bool {
        !matches!(self, Transition::NoChange)
    }
}

/// Monotonic cursor into an immutable timeline.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    timeline: Arc<Timeline>,
    current_index: usize,
    linear_scan_threshold: usize,
}

impl SyncEngine {
    /// Create an engine with its cursor on the first line.
    pub fn new(timeline: Arc<Timeline>) -> Self {
        Self::with_linear_threshold(timeline, DEFAULT_LINEAR_SCAN_THRESHOLD)
    }

    pub fn with_linear_threshold(timeline: Arc<Timeline>, linear_scan_threshold: usize) -> Self {
        Self {
            timeline,
            current_index: 0,
            linear_scan_threshold,
        }
    }

    pub fn timeline(&self) -> &Arc<Timeline> {
        &self.timeline
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Reconcile the cursor with a regular clock update.
    ///
    /// Takes the incremental path when `time` lies inside the next line's span,
    /// otherwise falls back to a hard search.
    pub fn on_time_update(&mut self, time: f64) -> Result<Transition, SyncError> {
        let time = self.validate(time)?;
        let lines = self.timeline.lines();
        let current = self.current_index;
        let start_of = |i: usize| lines.get(i).map(|line| line.timestamp);

        let in_current = start_of(current).is_some_and(|start| start <= time)
            && start_of(current + 1).map_or(true, |next| time < next);
        if in_current {
            return Ok(Transition::NoChange);
        }

        let in_next = start_of(current + 1).is_some_and(|next| next <= time)
            && start_of(current + 2).map_or(true, |after| time < after);
        if in_next {
            self.current_index = current + 1;
            tracing::trace!(index = self.current_index, time, "Advanced to next line");
            return Ok(Transition::AdvancedBy(1));
        }

        Ok(self.hard_search(time))
    }

    /// Re-derive the cursor for a seek. Never takes the incremental path, and
    /// always reports a jump so renderers restyle every line.
    pub fn on_seek(&mut self, time: f64) -> Result<Transition, SyncError> {
        let time = self.validate(time)?;
        Ok(self.hard_search(time))
    }

    fn hard_search(&mut self, time: f64) -> Transition {
        let previous = self.current_index;
        self.current_index =
            find_line_index_at_time(self.timeline.lines(), time, self.linear_scan_threshold);
        tracing::debug!(
            from = previous,
            to = self.current_index,
            time,
            "Cursor re-derived by search"
        );
        Transition::JumpedTo(self.current_index)
    }

    fn validate(&self, time: f64) -> Result<f64, SyncError> {
        SyncError::check_time(time).map_err(|err| {
            tracing::warn!(time, index = self.current_index, "Rejected playback time");
            err
        })
    }
}
