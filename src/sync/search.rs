//! Line lookup by playback time.

use crate::timeline::LyricLine;

/// Timelines up to this many lines are searched linearly; longer ones use
/// binary search.
pub const DEFAULT_LINEAR_SCAN_THRESHOLD: usize = 16;

/// Find the index of the line active at `time`.
///
/// Returns the greatest index whose timestamp is `<= time`, clamped to 0 when
/// `time` precedes every line.
pub fn find_line_index_at_time(lines: &[LyricLine], time: f64, linear_threshold: usize) -> usize {
    let after = if lines.len() <= linear_threshold {
        lines
            .iter()
            .position(|line| line.timestamp > time)
            .unwrap_or(lines.len())
    } else {
        lines.partition_point(|line| line.timestamp <= time)
    };
    after.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(stamps: &[f64]) -> Vec<LyricLine> {
        stamps
            .iter()
            .map(|&t| LyricLine::new(t, format!("line at {}", t)))
            .collect()
    }

    #[test]
    fn finds_line_between_boundaries() {
        let l = lines(&[0.0, 1.5, 2.5, 5.0]);
        assert_eq!(find_line_index_at_time(&l, 0.0, 16), 0);
        assert_eq!(find_line_index_at_time(&l, 1.49, 16), 0);
        assert_eq!(find_line_index_at_time(&l, 1.5, 16), 1);
        assert_eq!(find_line_index_at_time(&l, 2.0, 16), 1);
        assert_eq!(find_line_index_at_time(&l, 4.99, 16), 2);
    }

    #[test]
    fn past_the_end_pins_to_last() {
        let l = lines(&[0.0, 1.0, 2.0]);
        assert_eq!(find_line_index_at_time(&l, 1000.0, 16), 2);
    }

    #[test]
    fn before_first_clamps_to_zero() {
        let l = lines(&[1.0, 2.0]);
        assert_eq!(find_line_index_at_time(&l, 0.5, 16), 0);
        assert_eq!(find_line_index_at_time(&l, 0.5, 0), 0);
    }

    #[test]
    fn linear_and_binary_agree() {
        let stamps: Vec<f64> = (0..200).map(|i| i as f64 * 0.75).collect();
        let l = lines(&stamps);
        for step in 0..400 {
            let t = step as f64 * 0.4;
            assert_eq!(
                find_line_index_at_time(&l, t, usize::MAX),
                find_line_index_at_time(&l, t, 0),
                "mismatch at t={}",
                t
            );
        }
    }
}
