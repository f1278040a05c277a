//! Lyric timeline model and builder
//!
//! A [`Timeline`] is the ordered, deduplicated list of timed lines parsed from
//! LRC-style source text. It is built once per source and never mutated; a new
//! source produces a new timeline.
//!
//! Invariants upheld by every constructed timeline:
//! - it is never empty,
//! - the first line has timestamp `0.0` (a real `[00:00.00]` line or the
//!   lead-in marker),
//! - timestamps are strictly increasing.

mod parser;

use std::fmt::Write;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::SyncError;

pub use parser::{parse_tags, untimed_lines};

/// Text shown for the lead-in line inserted when the source has no entry at 0.
pub const DEFAULT_LEAD_IN_TEXT: &str = "♪";

/// Default shift applied to a line whose timestamp collides with an earlier one.
pub const DEFAULT_DUPLICATE_OFFSET: f64 = 1.0;

/// A single timed lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Start time in seconds
    pub timestamp: f64,
    /// Line text with the tag removed and whitespace trimmed
    pub text: String,
}

impl LyricLine {
    pub fn new(timestamp: f64, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }
}

/// Options controlling how source text becomes a timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineOptions {
    /// Placeholder text for the lead-in line at `0.0`
    pub lead_in_text: String,
    /// Seconds added to a timestamp that is already taken (must be > 0)
    pub duplicate_offset: f64,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            lead_in_text: DEFAULT_LEAD_IN_TEXT.to_string(),
            duplicate_offset: DEFAULT_DUPLICATE_OFFSET,
        }
    }
}

/// Ordered, immutable sequence of timed lyric lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    lines: Vec<LyricLine>,
    has_lyrics: bool,
}

impl Timeline {
    /// Build a timeline from LRC-style text using default options.
    ///
    /// Never fails: text without any tag yields a timeline holding only the
    /// lead-in line (see [`Timeline::has_lyrics`]).
    pub fn build(source: &str) -> Self {
        Self::build_with(source, &TimelineOptions::default())
    }

    /// Build a timeline with explicit options.
    ///
    /// Lines sharing a computed timestamp are all kept: each later one is
    /// moved forward by `duplicate_offset` until it lands on a free slot.
    /// This keeps ordering strict without dropping text, at the cost of
    /// approximate timing for such lines.
    pub fn build_with(source: &str, options: &TimelineOptions) -> Self {
        parser::build(source, options)
    }

    /// Like [`Timeline::build`], but reports `ParseEmpty` when the source has
    /// no timestamp tags at all.
    pub fn try_build(source: &str) -> Result<Self, SyncError> {
        Self::try_build_with(source, &TimelineOptions::default())
    }

    pub fn try_build_with(source: &str, options: &TimelineOptions) -> Result<Self, SyncError> {
        let timeline = Self::build_with(source, options);
        if timeline.has_lyrics() {
            Ok(timeline)
        } else {
            Err(SyncError::ParseEmpty)
        }
    }

    /// Timeline containing only the lead-in line.
    pub fn lead_in_only(lead_in_text: &str) -> Self {
        Self {
            lines: vec![LyricLine::new(0.0, lead_in_text)],
            has_lyrics: false,
        }
    }

    pub(crate) fn from_sorted(lines: Vec<LyricLine>, has_lyrics: bool) -> Self {
        debug_assert!(!lines.is_empty());
        debug_assert!(lines.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        Self { lines, has_lyrics }
    }

    /// True when at least one tagged line was parsed from the source.
    pub fn has_lyrics(&self) -> bool {
        self.has_lyrics
    }

    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&LyricLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false for a built timeline.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LyricLine> {
        self.lines.iter()
    }

    /// Timestamp of the last line, the best duration estimate when the media
    /// length is unknown.
    pub fn duration_hint(&self) -> f64 {
        self.lines.last().map(|l| l.timestamp).unwrap_or(0.0)
    }

    /// Render the timeline back to LRC text, one `[mm:ss.cc]text` per line.
    pub fn to_lrc(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.text.len() + 11).sum());
        for line in &self.lines {
            write_timestamp(&mut out, line.timestamp);
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a LyricLine;
    type IntoIter = std::slice::Iter<'a, LyricLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.lines)
    }
}

/// Write a timestamp in LRC form: `[mm:ss.cc]`.
pub fn write_timestamp(out: &mut String, seconds: f64) {
    let centis = (seconds.max(0.0) * 100.0).round() as u64;
    let mins = centis / 6000;
    let secs = (centis / 100) % 60;
    let frac = centis % 100;
    let _ = write!(out, "[{:02}:{:02}.{:02}]", mins, secs, frac);
}
