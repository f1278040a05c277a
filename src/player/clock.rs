//! Playback clocks
//!
//! The controller never measures time itself: it reads a [`PlaybackClock`]
//! injected at construction. [`WallClock`] is the terminal player's clock,
//! driven by `Instant` with a seek offset and speed multiplier.

use std::time::Instant;

/// External time source driving playback.
pub trait PlaybackClock {
    /// Current media position in seconds.
    fn current_time(&self) -> f64;
    /// Start or resume advancing.
    fn play(&mut self);
    /// Freeze at the current position.
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    /// Move to an absolute position in seconds.
    fn seek(&mut self, time: f64);
    /// Media length in seconds, when known.
    fn duration(&self) -> Option<f64> {
        None
    }
}

/// Wall-clock backed playback position.
///
/// Position is `time_offset + elapsed * speed` while running; pausing folds
/// the elapsed time into the offset.
#[derive(Debug, Clone)]
pub struct WallClock {
    /// Wall clock time when playback started/resumed
    start_time: Instant,
    /// Position at `start_time`
    time_offset: f64,
    /// Playback speed multiplier (1.0 = normal)
    speed: f64,
    paused: bool,
    duration: Option<f64>,
}

impl WallClock {
    /// Create a paused clock at position 0.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            time_offset: 0.0,
            speed: 1.0,
            paused: true,
            duration: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed.clamp(0.1, 16.0);
        self
    }

    pub fn with_duration(mut self, duration: Option<f64>) -> Self {
        self.duration = duration.filter(|d| d.is_finite() && *d > 0.0);
        self
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    fn elapsed(&self) -> f64 {
        if self.paused {
            0.0
        } else {
            self.start_time.elapsed().as_secs_f64() * self.speed
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock for WallClock {
    fn current_time(&self) -> f64 {
        let time = self.time_offset + self.elapsed();
        match self.duration {
            Some(duration) => time.min(duration),
            None => time,
        }
    }

    fn play(&mut self) {
        if self.paused {
            self.paused = false;
            self.start_time = Instant::now();
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.time_offset = self.current_time();
            self.paused = true;
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn seek(&mut self, time: f64) {
        self.time_offset = match self.duration {
            Some(duration) => time.clamp(0.0, duration),
            None => time.max(0.0),
        };
        self.start_time = Instant::now();
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}
