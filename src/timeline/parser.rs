//! LRC tag parsing.
//!
//! Supports `[m:ss]`, `[mm:ss.x]`, `[mm:ss.xx]` and `[mm:ss.xxx]` leading tags,
//! including several tags in a row (`[00:12.50][01:30.00]chorus`). Metadata
//! tags such as `[ar:Artist]` and lines without a tag contribute nothing.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{LyricLine, Timeline, TimelineOptions};

/// Largest accepted tag or shifted time in milliseconds (about 34 years).
///
/// Keeps every key exactly representable once converted to seconds, so
/// distinct keys stay distinct timestamps.
pub const MAX_TAG_MILLIS: u64 = 1 << 40;

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d+):(\d{2}(?:\.\d+)?)\]").expect("LRC tag pattern is valid")
});

/// Parse the leading timestamp tags of a line.
///
/// Returns the tag times in milliseconds and the remaining text (trimmed),
/// or `None` when the line does not start with a timestamp tag.
pub fn parse_tags(line: &str) -> Option<(Vec<u64>, &str)> {
    let mut rest = line.trim_start();
    let mut times = Vec::new();

    while let Some(caps) = TAG.captures(rest) {
        let Some(ms) = tag_millis(&caps[1], &caps[2]) else {
            break;
        };
        times.push(ms);
        rest = &rest[caps[0].len()..];
    }

    if times.is_empty() {
        None
    } else {
        Some((times, rest.trim()))
    }
}

fn tag_millis(minutes: &str, seconds: &str) -> Option<u64> {
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    minutes
        .checked_mul(60_000)?
        .checked_add((seconds * 1000.0).round() as u64)
        .filter(|&ms| ms <= MAX_TAG_MILLIS)
}

/// Non-empty, trimmed source lines for showing lyrics without timing.
pub fn untimed_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// First unused key at or after `requested`, stepping by `offset_ms`.
fn free_key(entries: &BTreeMap<u64, String>, requested: u64, offset_ms: u64) -> Option<u64> {
    let mut key = requested;
    while entries.contains_key(&key) {
        key = key.checked_add(offset_ms).filter(|&k| k <= MAX_TAG_MILLIS)?;
    }
    Some(key)
}

pub(super) fn build(source: &str, options: &TimelineOptions) -> Timeline {
    let offset_ms = ((options.duplicate_offset * 1000.0).round() as u64).max(1);
    let mut entries: BTreeMap<u64, String> = BTreeMap::new();

    for (line_num, line) in source.lines().enumerate() {
        let Some((times, text)) = parse_tags(line) else {
            continue;
        };

        for requested in times {
            let Some(key) = free_key(&entries, requested, offset_ms) else {
                tracing::warn!(
                    line = line_num + 1,
                    requested_ms = requested,
                    "No free timestamp left for duplicate lyric line, skipping"
                );
                continue;
            };
            if key != requested {
                tracing::warn!(
                    line = line_num + 1,
                    requested_ms = requested,
                    placed_ms = key,
                    "Duplicate lyric timestamp, shifting line later"
                );
            }
            entries.insert(key, text.to_string());
        }
    }

    let has_lyrics = !entries.is_empty();
    if !entries.contains_key(&0) {
        entries.insert(0, options.lead_in_text.clone());
    }

    let lines = entries
        .into_iter()
        .map(|(ms, text)| LyricLine::new(ms as f64 / 1000.0, text))
        .collect();

    Timeline::from_sorted(lines, has_lyrics)
}
