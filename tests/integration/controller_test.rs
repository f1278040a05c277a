//! Integration tests for driving the playback controller

use std::cell::RefCell;
use std::rc::Rc;

use lyrsync::player::{PlaybackClock, PlaybackController, TransitionKind, TransitionSink};
use lyrsync::sync::find_line_index_at_time;
use lyrsync::{LineState, SyncError, Timeline, Transition, TransitionEvent};

use super::helpers::load_fixture;

/// Clock whose position only moves when told to.
#[derive(Default)]
struct StepClock {
    now: f64,
    paused: bool,
}

impl PlaybackClock for StepClock {
    fn current_time(&self) -> f64 {
        self.now
    }
    fn play(&mut self) {
        self.paused = false;
    }
    fn pause(&mut self) {
        self.paused = true;
    }
    fn is_paused(&self) -> bool {
        self.paused
    }
    fn seek(&mut self, time: f64) {
        self.now = time;
    }
}

type Events = Rc<RefCell<Vec<TransitionEvent>>>;

fn controller_for(fixture: &str) -> (PlaybackController<StepClock, impl TransitionSink>, Events) {
    let events: Events = Rc::default();
    let sink = events.clone();
    let mut controller = PlaybackController::new(StepClock::default(), move |e: &TransitionEvent| {
        sink.borrow_mut().push(e.clone())
    });
    controller.attach(Timeline::build(&load_fixture(fixture)));
    (controller, events)
}

#[test]
fn small_forward_ticks_only_advance() {
    let (mut controller, events) = controller_for("long.lrc");

    for step in 0..=2400 {
        controller.tick(step as f64 * 0.1).unwrap();
    }

    let events = events.borrow();
    assert_eq!(events.len(), 120);
    assert!(events.iter().all(|e| e.kind == TransitionKind::Advance));
    assert!(events.iter().all(|e| e.changes.len() == 2));
    assert_eq!(controller.current_index(), Some(120));
}

#[test]
fn cursor_matches_lookup_after_backward_seeks() {
    let (mut controller, _events) = controller_for("long.lrc");
    let timeline = controller.timeline().unwrap().clone();

    controller.tick(239.0).unwrap();
    for time in [200.0, 3.9, 120.0, 0.0, 61.5, 2.0, 1.99] {
        controller.seek(time).unwrap();
        let expected = find_line_index_at_time(timeline.lines(), time, usize::MAX);
        assert_eq!(controller.current_index(), Some(expected), "seek to {}", time);
        assert_eq!(controller.clock().unwrap().current_time(), time);
    }
}

/// The active line starts at or before `time` and the next one after it.
fn assert_cursor_covers(controller: &PlaybackController<StepClock, impl TransitionSink>, time: f64) {
    let lines = controller.timeline().unwrap().lines();
    let i = controller.current_index().unwrap();
    assert!(lines[i].timestamp <= time, "line {} starts after {}", i, time);
    assert!(
        lines.get(i + 1).map_or(true, |next| time < next.timestamp),
        "line {} is stale at {}",
        i,
        time
    );
}

#[test]
fn forward_ticks_resume_incrementally_after_backward_seek() {
    let (mut controller, _events) = controller_for("long.lrc");

    for tenths in 0..=2000 {
        let time = tenths as f64 / 10.0;
        controller.tick(time).unwrap();
        assert_cursor_covers(&controller, time);
    }

    controller.seek(50.0).unwrap();
    assert_cursor_covers(&controller, 50.0);

    for tenths in 501..=2400 {
        let time = tenths as f64 / 10.0;
        let transition = controller.tick(time).unwrap();
        assert!(
            !matches!(transition, Transition::JumpedTo(_)),
            "tick at {} jumped",
            time
        );
        assert_cursor_covers(&controller, time);
    }
    assert_eq!(controller.current_index(), Some(120));
}

#[test]
fn large_tick_is_reported_as_jump_with_full_classification() {
    let (mut controller, events) = controller_for("sample.lrc");

    assert_eq!(controller.tick(5.2).unwrap(), Transition::JumpedTo(4));

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert!(events[0].is_jump());
    assert_eq!(events[0].changes.len(), 5);
    assert_eq!(
        controller.classification(),
        vec![
            LineState::Visited,
            LineState::Visited,
            LineState::Visited,
            LineState::Visited,
            LineState::Active,
        ]
    );
}

#[test]
fn repeated_time_updates_are_idempotent() {
    let (mut controller, events) = controller_for("sample.lrc");

    controller.tick(2.6).unwrap();
    let after_first = events.borrow().len();
    for _ in 0..5 {
        assert_eq!(controller.tick(2.6).unwrap(), Transition::NoChange);
    }
    assert_eq!(events.borrow().len(), after_first);
    assert_eq!(controller.active_line().unwrap().text, "second");
}

#[test]
fn invalid_time_leaves_cursor_alone() {
    let (mut controller, events) = controller_for("sample.lrc");
    controller.tick(1.6).unwrap();

    assert_eq!(
        controller.tick(-1.0),
        Err(SyncError::InvalidTime { time: -1.0 })
    );
    assert!(controller.seek(f64::NAN).is_err());
    assert_eq!(controller.current_index(), Some(1));
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn destroyed_controller_ignores_everything() {
    let (mut controller, events) = controller_for("sample.lrc");
    controller.tick(1.6).unwrap();
    controller.destroy();
    controller.destroy();

    assert_eq!(controller.tick(5.0).unwrap(), Transition::NoChange);
    assert_eq!(controller.seek(0.0).unwrap(), Transition::NoChange);
    assert_eq!(controller.play().unwrap(), Transition::NoChange);
    assert!(controller.is_destroyed());
    assert_eq!(controller.current_index(), Some(1));
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn replacing_timeline_resets_cursor() {
    let (mut controller, _events) = controller_for("long.lrc");
    controller.tick(100.0).unwrap();

    controller.attach(Timeline::build(&load_fixture("crlf.lrc")));
    assert_eq!(controller.current_index(), Some(0));
    assert_eq!(controller.active_line().unwrap().text, "a");
}
