//! Progress bar rendering for the terminal player.
//!
//! Displays playback progress with a tick for the start of every lyric line.

use crate::timeline::Timeline;

/// Format a duration in seconds to MM:SS format.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// Line starts are drawn as `◆` and the playhead as `⏺`; the playhead wins
/// when both fall on the same cell.
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where filled_count is the number of
/// cells before the playhead.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    timeline: &Timeline,
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    for line in timeline.iter().skip(1) {
        let pos = if total_duration > 0.0 {
            ((line.timestamp / total_duration) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width {
            bar[pos] = '◆';
        }
    }

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// One-line status: state, position, duration and the bar.
pub fn status_line(
    paused: bool,
    current_time: f64,
    total_duration: f64,
    timeline: &Timeline,
    bar_width: usize,
) -> String {
    let (bar, _) = build_progress_bar_chars(bar_width, current_time, total_duration, timeline);
    format!(
        "{} {} / {} {}",
        if paused { "⏸" } else { "▶" },
        format_duration(current_time),
        format_duration(total_duration),
        bar.into_iter().collect::<String>()
    )
}
