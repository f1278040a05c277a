//! Line classification and transition events
//!
//! Classification is never stored: it is derived from the cursor on demand so
//! it cannot drift from it. Transition events carry the indices whose
//! classification changed, for a renderer to restyle.

use serde::Serialize;

/// Result of processing an input event.
///
/// Returned by input handlers to signal what the main loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback
    Continue,
    /// Playback state changed; print the status line
    ShowStatus,
    /// Print the key help
    ShowHelp,
    /// Exit the player
    Quit,
}

/// Display state of a line relative to the active cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineState {
    /// Before the active line
    Visited,
    /// The line being sung now
    Active,
    /// After the active line
    Unvisited,
}

impl LineState {
    /// Classify `index` relative to the cursor at `current`.
    pub fn classify(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => LineState::Visited,
            std::cmp::Ordering::Equal => LineState::Active,
            std::cmp::Ordering::Greater => LineState::Unvisited,
        }
    }
}

/// Classification of every line for a cursor position.
pub fn classify_all(len: usize, current: usize) -> Vec<LineState> {
    (0..len).map(|i| LineState::classify(i, current)).collect()
}

/// How the cursor moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Stepped to the next line; only two lines changed state
    Advance,
    /// Re-derived by search; any span of lines may have changed state
    Jump,
}

/// A single line whose classification changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineChange {
    pub index: usize,
    pub state: LineState,
}

/// Notification emitted to the renderer on every cursor change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionEvent {
    pub kind: TransitionKind,
    pub previous_index: usize,
    pub new_index: usize,
    /// Lines to restyle. For an advance: the old active line (now visited)
    /// and the new active line. For a jump: every line of the timeline.
    pub changes: Vec<LineChange>,
}

impl TransitionEvent {
    pub fn advance(previous_index: usize, new_index: usize) -> Self {
        Self {
            kind: TransitionKind::Advance,
            previous_index,
            new_index,
            changes: vec![
                LineChange {
                    index: previous_index,
                    state: LineState::Visited,
                },
                LineChange {
                    index: new_index,
                    state: LineState::Active,
                },
            ],
        }
    }

    pub fn jump(previous_index: usize, new_index: usize, len: usize) -> Self {
        let changes = classify_all(len, new_index)
            .into_iter()
            .enumerate()
            .map(|(index, state)| LineChange { index, state })
            .collect();
        Self {
            kind: TransitionKind::Jump,
            previous_index,
            new_index,
            changes,
        }
    }

    pub fn is_jump(&self) -> bool {
        self.kind == TransitionKind::Jump
    }
}
