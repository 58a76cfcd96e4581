// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Evaluation runner.
//!
//! Plays the session's video and, once per sample period, records a
//! synthetic severity score at the current playback position. Only the most
//! recent samples are kept. The runner owns its timer and its playback
//! handle; dropping it stops both.

use crate::io::handles::{MediaUrls, PlaybackUrl};
use crate::models::session::SessionStore;
use crate::util::interval::IntervalTimer;
use crate::util::playback::{PlaybackClock, PlaybackEvent};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Lowest and highest severity score.
pub const SEVERITY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Chart grid lines, in chart units.
pub const GRID_LINES: [f64; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

/// Divisions on the severity gauge.
pub const GAUGE_DIVISIONS: usize = 10;

/// One severity sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisPoint {
    /// Playback position in seconds.
    pub time: f64,
    pub value: u8,
}

/// Sliding window of the most recent samples.
#[derive(Debug, Clone)]
pub struct SeverityBuffer {
    points: VecDeque<AnalysisPoint>,
    capacity: usize,
}

impl SeverityBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, dropping the oldest when full.
    pub fn push(&mut self, point: AnalysisPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&AnalysisPoint> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisPoint> {
        self.points.iter()
    }

    /// Mean severity, 0 when empty.
    pub fn average(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.points.iter().map(|p| p.value as u32).sum();
        sum as f64 / self.points.len() as f64
    }

    /// Mean severity to one decimal place.
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average())
    }

    /// Gauge fill height as a percentage.
    pub fn gauge_fill_percent(&self) -> f64 {
        self.rounded_average() / 10.0 * 100.0
    }

    /// Distance of the average marker from the top of the gauge, in percent.
    pub fn marker_top_percent(&self) -> f64 {
        100.0 - self.gauge_fill_percent()
    }

    // The gauge follows the displayed (rounded) average.
    fn rounded_average(&self) -> f64 {
        self.average_label().parse().unwrap_or(0.0)
    }

    /// Points in a 0..=100 chart space; larger severity has smaller y.
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        let last = self.points.len().saturating_sub(1);
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = if last == 0 {
                    0.0
                } else {
                    i as f64 / last as f64 * 100.0
                };
                (x, 100.0 - p.value as f64 * 10.0)
            })
            .collect()
    }
}

/// Whether analysis is running.
#[derive(Debug, Clone)]
pub enum RunState {
    Idle,
    Running { timer: IntervalTimer },
}

/// Video playback tied to the evaluation page.
#[derive(Debug)]
struct Playback {
    clock: PlaybackClock,
    _url: PlaybackUrl,
}

pub struct EvaluationRunner<R: Rng = ThreadRng> {
    playback: Option<Playback>,
    state: RunState,
    buffer: SeverityBuffer,
    period: Duration,
    rng: R,
}

impl<R: Rng> EvaluationRunner<R> {
    /// Mount the runner over the session's committed video, if any.
    pub fn new(
        store: &SessionStore,
        urls: &MediaUrls,
        period: Duration,
        capacity: usize,
        rng: R,
    ) -> Self {
        let playback = store.get().video_file.as_ref().map(|file| Playback {
            clock: PlaybackClock::new(file.duration()),
            _url: urls.acquire(file),
        });
        Self {
            playback,
            state: RunState::Idle,
            buffer: SeverityBuffer::new(capacity),
            period,
            rng,
        }
    }

    /// The start/stop button is disabled without a video.
    pub fn can_run(&self) -> bool {
        self.playback.is_some()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_running() {
            "Stop Analysis"
        } else {
            "Start Analysis"
        }
    }

    pub fn buffer(&self) -> &SeverityBuffer {
        &self.buffer
    }

    pub fn position(&self) -> f64 {
        self.playback.as_ref().map_or(0.0, |p| p.clock.position())
    }

    pub fn duration(&self) -> f64 {
        self.playback.as_ref().map_or(0.0, |p| p.clock.duration())
    }

    /// When the next sample is due, for scheduling a repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            RunState::Running { timer } => Some(timer.next_deadline()),
            RunState::Idle => None,
        }
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Start playback and sampling.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        let Some(playback) = &mut self.playback else {
            return;
        };
        playback.clock.play();
        self.state = RunState::Running {
            timer: IntervalTimer::start(self.period, now),
        };
        log::info!("Analysis started at {:.1}s", playback.clock.position());
    }

    /// Cancel the timer and pause playback.
    pub fn stop(&mut self) {
        if let RunState::Running { .. } = std::mem::replace(&mut self.state, RunState::Idle) {
            log::info!(
                "Analysis stopped with {} sample(s), average {}",
                self.buffer.len(),
                self.buffer.average_label()
            );
        }
        if let Some(playback) = &mut self.playback {
            playback.clock.pause();
        }
    }

    /// Advance playback by `elapsed` and take any samples due at `now`.
    ///
    /// If the video ends during `elapsed`, only samples due up to the end
    /// are taken. Returns the number of samples taken.
    pub fn update(&mut self, now: Instant, elapsed: Duration) -> u32 {
        let RunState::Running { timer } = &mut self.state else {
            return 0;
        };
        let Some(playback) = &mut self.playback else {
            return 0;
        };

        let before = playback.clock.position();
        let event = playback.clock.advance(elapsed);
        let until = match event {
            PlaybackEvent::Ended => {
                let played = Duration::from_secs_f64((playback.clock.position() - before).max(0.0));
                let overshoot = elapsed.saturating_sub(played);
                now.checked_sub(overshoot).unwrap_or(now)
            }
            PlaybackEvent::None => now,
        };
        let ticks = timer.poll(until);
        let position = playback.clock.position();
        for _ in 0..ticks {
            let value = self.rng.gen_range(SEVERITY_RANGE);
            log::debug!("Severity {} at {:.2}s", value, position);
            self.buffer.push(AnalysisPoint {
                time: position,
                value,
            });
        }

        if event == PlaybackEvent::Ended {
            self.stop();
        }
        ticks
    }
}

impl<R: Rng> Drop for EvaluationRunner<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::video::VideoFile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    const SECOND: Duration = Duration::from_secs(1);

    fn point(value: u8) -> AnalysisPoint {
        AnalysisPoint { time: 0.0, value }
    }

    fn store_with_video(duration: f64) -> SessionStore {
        let mut store = SessionStore::new();
        store.set_video_file(VideoFile {
            path: PathBuf::from("/videos/gait.mp4"),
            name: "gait.mp4".into(),
            size_bytes: 1,
            duration_secs: Some(duration),
        });
        store
    }

    fn runner(store: &SessionStore, urls: &MediaUrls) -> EvaluationRunner<StdRng> {
        EvaluationRunner::new(store, urls, SECOND, 50, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_buffer_keeps_newest_fifty() {
        let mut buffer = SeverityBuffer::new(50);
        for i in 0..51 {
            buffer.push(AnalysisPoint {
                time: i as f64,
                value: 1,
            });
        }
        assert_eq!(buffer.len(), 50);
        assert_eq!(buffer.iter().next().unwrap().time, 1.0);
        assert_eq!(buffer.iter().last().unwrap().time, 50.0);
    }

    #[test]
    fn test_average_label() {
        let mut buffer = SeverityBuffer::new(50);
        assert_eq!(buffer.average_label(), "0.0");
        for v in [2, 4, 6] {
            buffer.push(point(v));
        }
        assert_eq!(buffer.average_label(), "4.0");
        assert_eq!(buffer.gauge_fill_percent(), 40.0);
        assert_eq!(buffer.marker_top_percent(), 60.0);
    }

    #[test]
    fn test_chart_points() {
        let mut buffer = SeverityBuffer::new(50);
        assert!(buffer.chart_points().is_empty());

        buffer.push(point(3));
        assert_eq!(buffer.chart_points(), vec![(0.0, 70.0)]);

        buffer.push(point(10));
        buffer.push(point(1));
        assert_eq!(
            buffer.chart_points(),
            vec![(0.0, 70.0), (50.0, 0.0), (100.0, 90.0)]
        );
    }

    #[test]
    fn test_cannot_run_without_video() {
        let urls = MediaUrls::new();
        let mut runner = runner(&SessionStore::new(), &urls);
        assert!(!runner.can_run());
        runner.toggle(Instant::now());
        assert!(!runner.is_running());
    }

    #[test]
    fn test_samples_once_per_period() {
        let urls = MediaUrls::new();
        let store = store_with_video(60.0);
        let mut runner = runner(&store, &urls);
        let t0 = Instant::now();

        runner.toggle(t0);
        assert!(runner.is_running());
        assert_eq!(runner.button_label(), "Stop Analysis");

        assert_eq!(runner.update(t0 + Duration::from_millis(500), Duration::from_millis(500)), 0);
        assert_eq!(runner.update(t0 + SECOND, Duration::from_millis(500)), 1);
        assert_eq!(runner.update(t0 + 3 * SECOND, 2 * SECOND), 2);

        assert_eq!(runner.buffer().len(), 3);
        let last = runner.buffer().iter().last().unwrap();
        assert_eq!(last.time, 3.0);
        assert!(runner
            .buffer()
            .iter()
            .all(|p| SEVERITY_RANGE.contains(&p.value)));
    }

    #[test]
    fn test_stop_cancels_ticks() {
        let urls = MediaUrls::new();
        let store = store_with_video(60.0);
        let mut runner = runner(&store, &urls);
        let t0 = Instant::now();

        runner.start(t0);
        runner.update(t0 + SECOND, SECOND);
        runner.toggle(t0 + SECOND);
        assert!(!runner.is_running());
        assert_eq!(runner.next_deadline(), None);

        assert_eq!(runner.update(t0 + 10 * SECOND, 9 * SECOND), 0);
        assert_eq!(runner.buffer().len(), 1);
        assert_eq!(runner.position(), 1.0);
    }

    #[test]
    fn test_video_end_stops_analysis() {
        let urls = MediaUrls::new();
        let store = store_with_video(2.5);
        let mut runner = runner(&store, &urls);
        let t0 = Instant::now();

        runner.start(t0);
        runner.update(t0 + 2 * SECOND, 2 * SECOND);
        assert_eq!(runner.update(t0 + 3 * SECOND, SECOND), 0);
        assert!(!runner.is_running());
        assert_eq!(runner.position(), 2.5);
        assert_eq!(runner.buffer().len(), 2);
    }

    #[test]
    fn test_stalled_frame_past_end_only_samples_until_end() {
        let urls = MediaUrls::new();
        let store = store_with_video(2.5);
        let mut runner = runner(&store, &urls);
        let t0 = Instant::now();

        runner.start(t0);
        assert_eq!(runner.update(t0 + 10 * SECOND, 10 * SECOND), 2);
        assert!(!runner.is_running());
        assert_eq!(runner.buffer().len(), 2);
        assert!(runner.buffer().iter().all(|p| p.time == 2.5));
    }

    #[test]
    fn test_drop_releases_playback_handle() {
        let urls = MediaUrls::new();
        let store = store_with_video(60.0);
        let mut runner = runner(&store, &urls);
        runner.start(Instant::now());
        assert_eq!(urls.live_count(), 1);
        drop(runner);
        assert_eq!(urls.live_count(), 0);
    }

    #[test]
    fn test_restart_keeps_buffer() {
        let urls = MediaUrls::new();
        let store = store_with_video(60.0);
        let mut runner = runner(&store, &urls);
        let t0 = Instant::now();

        runner.start(t0);
        runner.update(t0 + SECOND, SECOND);
        runner.stop();
        runner.start(t0 + 5 * SECOND);
        runner.update(t0 + 6 * SECOND, SECOND);
        assert_eq!(runner.buffer().len(), 2);
    }
}
