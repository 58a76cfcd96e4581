// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback position tracking.
//!
//! Stands in for a video element's transport: a position over a known
//! duration that advances while playing and stops at the end.

use std::time::Duration;

/// What happened during a call to [`PlaybackClock::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    None,
    /// The position reached the end and playback paused.
    Ended,
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    position: f64,
    duration: f64,
    playing: bool,
}

impl PlaybackClock {
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: duration.max(0.0),
            playing: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start playing. Restarts from zero when already at the end.
    pub fn play(&mut self) {
        if self.duration > 0.0 && self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to `time`, clamped to the known duration.
    pub fn seek(&mut self, time: f64) {
        let upper = if self.duration > 0.0 { self.duration } else { f64::MAX };
        self.position = if time.is_finite() {
            time.clamp(0.0, upper)
        } else {
            0.0
        };
    }

    /// Move the position forward by `elapsed` if playing.
    ///
    /// With an unknown (zero) duration playback never ends on its own.
    pub fn advance(&mut self, elapsed: Duration) -> PlaybackEvent {
        if !self.playing {
            return PlaybackEvent::None;
        }
        self.position += elapsed.as_secs_f64();
        if self.duration > 0.0 && self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
            return PlaybackEvent::Ended;
        }
        PlaybackEvent::None
    }
}
