//! Integration tests for building timelines from lyric files

use lyrsync::timeline::untimed_lines;
use lyrsync::{SyncError, Timeline, TimelineOptions};

use super::helpers::load_fixture;

#[test]
fn sample_fixture_builds_sorted_deduplicated_timeline() {
    let timeline = Timeline::build(&load_fixture("sample.lrc"));

    insta::assert_snapshot!(timeline.to_lrc(), @r"
    [00:00.00]♪
    [00:01.50]first
    [00:02.50]second
    [00:03.50]second again
    [00:05.00]third
    ");
    assert!(timeline.has_lyrics());
}

#[test]
fn timestamps_strictly_increase_from_zero() {
    for name in ["sample.lrc", "crlf.lrc", "long.lrc"] {
        let timeline = Timeline::build(&load_fixture(name));
        assert_eq!(timeline.lines()[0].timestamp, 0.0, "{}", name);
        for pair in timeline.lines().windows(2) {
            assert!(
                pair[0].timestamp < pair[1].timestamp,
                "{}: {} !< {}",
                name,
                pair[0].timestamp,
                pair[1].timestamp
            );
        }
    }
}

#[test]
fn crlf_fixture_has_no_lead_in() {
    let timeline = Timeline::build(&load_fixture("crlf.lrc"));
    let texts: Vec<&str> = timeline.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d"]);
}

#[test]
fn long_fixture_has_lead_in_plus_every_line() {
    let timeline = Timeline::build(&load_fixture("long.lrc"));
    assert_eq!(timeline.len(), 121);
    assert_eq!(timeline.lines()[0].text, "♪");
    assert_eq!(timeline.lines()[120].timestamp, 240.0);
    assert_eq!(timeline.duration_hint(), 240.0);
}

#[test]
fn plain_text_is_reported_empty_and_shown_untimed() {
    let source = load_fixture("plain.txt");
    assert_eq!(Timeline::try_build(&source), Err(SyncError::ParseEmpty));

    let timeline = Timeline::build(&source);
    assert!(!timeline.has_lyrics());
    assert_eq!(timeline.len(), 1);

    assert_eq!(
        untimed_lines(&source),
        vec!["Just some words", "with no timing", "at all"]
    );
}

#[test]
fn custom_lead_in_and_offset_apply() {
    let options = TimelineOptions {
        lead_in_text: "...".to_string(),
        duplicate_offset: 0.25,
    };
    let timeline = Timeline::build_with(&load_fixture("sample.lrc"), &options);
    assert_eq!(timeline.lines()[0].text, "...");
    assert_eq!(timeline.lines()[3].timestamp, 2.75);
    assert_eq!(timeline.lines()[3].text, "second again");
}

#[test]
fn timeline_serializes_as_line_array() {
    let timeline = Timeline::build(&load_fixture("crlf.lrc"));
    let value = serde_json::to_value(&timeline).unwrap();
    let lines = value.as_array().expect("timeline serializes as an array");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1]["timestamp"], 1.5);
    assert_eq!(lines[1]["text"], "b");
}
