//! In-memory media player with a playback clock.
//!
//! Seeks are requested immediately but only reach the media element on the
//! next clock tick, the way a real element lags behind a fast-moving
//! pointer. The requested position is kept in the scrub cache meanwhile.

use super::events::EventKind;
use super::media::MediaPlayer;

#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    /// Position of the media element
    media_time: f64,
    /// Seek requested but not yet applied to the element
    pending_seek: Option<f64>,
    /// Last requested or reported position
    cached_time: f64,
    duration: f64,
    paused: bool,
    scrubbing: bool,
    ended: bool,
    width: f64,
}

impl SimulatedPlayer {
    /// A paused player at position 0.
    pub fn new(duration: f64, width: f64) -> Self {
        Self {
            media_time: 0.0,
            pending_seek: None,
            cached_time: 0.0,
            duration,
            paused: true,
            scrubbing: false,
            ended: false,
            width,
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Whether a requested seek is still waiting for the media element.
    pub fn is_seeking(&self) -> bool {
        self.pending_seek.is_some()
    }

    /// Advance the clock by `dt` seconds and return the events it produced.
    pub fn tick(&mut self, dt: f64) -> Vec<EventKind> {
        let mut events = Vec::new();
        let mut moved = false;

        if let Some(target) = self.pending_seek.take() {
            self.media_time = target;
            moved = true;
        }

        if !self.paused && !self.ended {
            self.media_time = (self.media_time + dt).min(self.duration);
            moved = true;
        }

        if moved {
            if !self.scrubbing {
                self.cached_time = self.media_time;
            }
            events.push(EventKind::TimeUpdate);
        }

        if !self.paused && !self.ended && self.media_time >= self.duration {
            self.ended = true;
            self.paused = true;
            tracing::debug!(duration = self.duration, "playback ended");
            events.push(EventKind::Ended);
        }

        events
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.play();
        } else {
            self.pause();
        }
    }
}

impl MediaPlayer for SimulatedPlayer {
    fn current_time(&self) -> f64 {
        self.media_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let target = seconds.clamp(0.0, self.duration.max(0.0));
        tracing::trace!(requested = seconds, target, "seek");
        self.pending_seek = Some(target);
        self.cached_time = target;
        self.ended = false;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn play(&mut self) {
        if self.ended {
            // Replay from the start
            self.ended = false;
            self.pending_seek = Some(0.0);
            self.cached_time = 0.0;
        }
        self.paused = false;
    }

    fn scrubbing(&self) -> bool {
        self.scrubbing
    }

    fn set_scrubbing(&mut self, scrubbing: bool) {
        self.scrubbing = scrubbing;
    }

    fn cached_scrub_time(&self) -> f64 {
        self.cached_time
    }

    fn width(&self) -> f64 {
        self.width
    }
}
