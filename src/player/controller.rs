//! Playback controller
//!
//! Mediates between an injected [`PlaybackClock`] and the [`SyncEngine`], and
//! turns cursor transitions into [`TransitionEvent`]s for an injected
//! [`TransitionSink`].
//!
//! # Threading
//!
//! All operations are synchronous and expect to be called from one thread.
//! The host must not re-enter the controller from inside a sink callback or
//! run `attach`/`destroy` while a `tick` is in flight.

use std::sync::Arc;

use crate::error::SyncError;
use crate::player::clock::PlaybackClock;
use crate::player::state::{classify_all, LineState, TransitionEvent};
use crate::sync::{SyncEngine, Transition, DEFAULT_LINEAR_SCAN_THRESHOLD};
use crate::timeline::{LyricLine, Timeline};

/// Receiver of line transition notifications (typically a renderer).
pub trait TransitionSink {
    fn notify(&mut self, event: &TransitionEvent);
}

impl<F> TransitionSink for F
where
    F: FnMut(&TransitionEvent),
{
    fn notify(&mut self, event: &TransitionEvent) {
        self(event)
    }
}

/// Drives a [`SyncEngine`] from a playback clock.
pub struct PlaybackController<C: PlaybackClock, S: TransitionSink> {
    /// `None` once destroyed
    clock: Option<C>,
    sink: Option<S>,
    engine: Option<SyncEngine>,
    linear_scan_threshold: usize,
}

impl<C: PlaybackClock, S: TransitionSink> PlaybackController<C, S> {
    pub fn new(clock: C, sink: S) -> Self {
        Self {
            clock: Some(clock),
            sink: Some(sink),
            engine: None,
            linear_scan_threshold: DEFAULT_LINEAR_SCAN_THRESHOLD,
        }
    }

    /// Override the size below which hard searches scan linearly.
    pub fn with_linear_threshold(mut self, threshold: usize) -> Self {
        self.linear_scan_threshold = threshold;
        self
    }

    /// Replace the timeline and reset the cursor to the first line.
    pub fn attach(&mut self, timeline: impl Into<Arc<Timeline>>) {
        if self.is_destroyed() {
            tracing::debug!("Ignoring attach on destroyed controller");
            return;
        }
        let timeline = timeline.into();
        tracing::info!(
            lines = timeline.len(),
            synced = timeline.has_lyrics(),
            "Attached lyric timeline"
        );
        self.engine = Some(SyncEngine::with_linear_threshold(
            timeline,
            self.linear_scan_threshold,
        ));
    }

    /// Forward a clock update to the engine.
    ///
    /// A no-op after [`destroy`](Self::destroy), so stale clock events
    /// delivered during teardown are harmless.
    pub fn tick(&mut self, time: f64) -> Result<Transition, SyncError> {
        if self.is_destroyed() {
            return Ok(Transition::NoChange);
        }
        let engine = self.engine.as_mut().ok_or(SyncError::NotAttached)?;
        let previous = engine.current_index();
        let transition = engine.on_time_update(time)?;
        self.emit(previous, transition);
        Ok(transition)
    }

    /// Tick with the clock's current position.
    pub fn sync_to_clock(&mut self) -> Result<Transition, SyncError> {
        match self.clock.as_ref() {
            Some(clock) => {
                let now = clock.current_time();
                self.tick(now)
            }
            None => Ok(Transition::NoChange),
        }
    }

    /// Move the clock to `time` and re-derive the cursor from where the clock
    /// landed, which may be earlier when the clock clamps to its duration.
    pub fn seek(&mut self, time: f64) -> Result<Transition, SyncError> {
        if self.is_destroyed() {
            return Ok(Transition::NoChange);
        }
        let time = SyncError::check_time(time)?;
        let engine = self.engine.as_mut().ok_or(SyncError::NotAttached)?;
        let landed = match self.clock.as_mut() {
            Some(clock) => {
                clock.seek(time);
                clock.current_time()
            }
            None => time,
        };
        let previous = engine.current_index();
        let transition = engine.on_seek(landed)?;
        tracing::debug!(time, landed, from = previous, "Seek");
        self.emit(previous, transition);
        Ok(transition)
    }

    /// Seek to the start of a line. Indices past the end clamp to the last line.
    pub fn seek_to_line(&mut self, index: usize) -> Result<Transition, SyncError> {
        let timeline = self.timeline().ok_or(SyncError::NotAttached)?;
        let index = index.min(timeline.last_index());
        let time = timeline.lines()[index].timestamp;
        self.seek(time)
    }

    /// Seek to a fraction of the media duration, clamped to `[0, 1]`.
    ///
    /// Uses the clock's duration when known, otherwise the last line's time.
    pub fn seek_fraction(&mut self, fraction: f64) -> Result<Transition, SyncError> {
        if !fraction.is_finite() {
            return Err(SyncError::InvalidTime { time: fraction });
        }
        let duration = self.duration().ok_or(SyncError::NotAttached)?;
        self.seek(fraction.clamp(0.0, 1.0) * duration)
    }

    /// Resume the clock and re-derive the cursor against its position.
    ///
    /// The hard re-derivation corrects for drift while paused or a non-zero
    /// starting offset.
    pub fn play(&mut self) -> Result<Transition, SyncError> {
        if self.is_destroyed() {
            return Ok(Transition::NoChange);
        }
        let engine = self.engine.as_mut().ok_or(SyncError::NotAttached)?;
        let Some(clock) = self.clock.as_mut() else {
            return Ok(Transition::NoChange);
        };
        let now = SyncError::check_time(clock.current_time())?;
        clock.play();
        let previous = engine.current_index();
        let transition = engine.on_seek(now)?;
        self.emit(previous, transition);
        Ok(transition)
    }

    pub fn pause(&mut self) {
        if let Some(clock) = self.clock.as_mut() {
            clock.pause();
        }
    }

    /// Pause when playing, play when paused.
    pub fn toggle_pause(&mut self) -> Result<Transition, SyncError> {
        if self.is_paused() {
            self.play()
        } else {
            self.pause();
            Ok(Transition::NoChange)
        }
    }

    /// Release the clock and sink. Safe to call any number of times.
    pub fn destroy(&mut self) {
        if let Some(mut clock) = self.clock.take() {
            clock.pause();
            tracing::debug!("Playback controller destroyed");
        }
        self.sink = None;
    }

    pub fn is_destroyed(&self) -> bool {
        self.clock.is_none()
    }

    pub fn is_attached(&self) -> bool {
        self.engine.is_some()
    }

    /// True when paused, or when there is no clock any more.
    pub fn is_paused(&self) -> bool {
        self.clock.as_ref().map_or(true, |clock| clock.is_paused())
    }

    pub fn clock(&self) -> Option<&C> {
        self.clock.as_ref()
    }

    pub fn timeline(&self) -> Option<&Arc<Timeline>> {
        self.engine.as_ref().map(|engine| engine.timeline())
    }

    pub fn current_index(&self) -> Option<usize> {
        self.engine.as_ref().map(|engine| engine.current_index())
    }

    pub fn active_line(&self) -> Option<&LyricLine> {
        let engine = self.engine.as_ref()?;
        engine.timeline().get(engine.current_index())
    }

    /// Classification of one line, `None` when unattached or out of range.
    pub fn classify(&self, index: usize) -> Option<LineState> {
        let engine = self.engine.as_ref()?;
        (index < engine.timeline().len())
            .then(|| LineState::classify(index, engine.current_index()))
    }

    /// Classification of every line, derived from the cursor.
    pub fn classification(&self) -> Vec<LineState> {
        self.engine
            .as_ref()
            .map(|engine| classify_all(engine.timeline().len(), engine.current_index()))
            .unwrap_or_default()
    }

    /// Media duration: the clock's when known, else the last line's time.
    pub fn duration(&self) -> Option<f64> {
        let fallback = self.timeline().map(|timeline| timeline.duration_hint());
        self.clock
            .as_ref()
            .and_then(|clock| clock.duration())
            .or(fallback)
    }

    /// Playback position as a fraction of the duration.
    pub fn progress(&self) -> Option<f64> {
        let now = self.clock.as_ref()?.current_time();
        let duration = self.duration()?;
        Some(if duration > 0.0 {
            (now / duration).clamp(0.0, 1.0)
        } else {
            1.0
        })
    }

    fn emit(&mut self, previous: usize, transition: Transition) {
        let Some(len) = self.engine.as_ref().map(|engine| engine.timeline().len()) else {
            return;
        };
        let event = match transition {
            Transition::NoChange => return,
            Transition::AdvancedBy(1) => TransitionEvent::advance(previous, previous + 1),
            Transition::AdvancedBy(n) => TransitionEvent::jump(previous, previous + n, len),
            Transition::JumpedTo(index) => TransitionEvent::jump(previous, index, len),
        };
        if let Some(sink) = self.sink.as_mut() {
            sink.notify(&event);
        }
    }
}
