// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Timeline arithmetic.
//!
//! Conversions between playback time in seconds and fractions of a
//! timeline widget's width, plus the `m:ss` time label.

use crate::models::segment::VideoSegment;

/// Fraction of `duration` reached at `time`, clamped to 0.0..=1.0.
///
/// Zero when the duration is unknown.
pub fn progress_fraction(time: f64, duration: f64) -> f64 {
    if duration > 0.0 && time.is_finite() {
        (time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Time to seek to when the timeline is clicked at `x` pixels of `width`.
pub fn seek_time(x: f32, width: f32, duration: f64) -> Option<f64> {
    if width <= 0.0 || duration <= 0.0 {
        return None;
    }
    let fraction = (x / width).clamp(0.0, 1.0) as f64;
    Some(fraction * duration)
}

/// Left edge and width of a segment as timeline fractions.
///
/// Reversed segments are drawn over `[end, start]`.
pub fn segment_span(segment: &VideoSegment, duration: f64) -> (f64, f64) {
    let (lo, hi) = segment.bounds();
    let left = progress_fraction(lo, duration);
    let right = progress_fraction(hi, duration);
    (left, right - left)
}

/// Format seconds as `m:ss`, truncating both parts.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let remaining = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_truncates() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.99), "0:05");
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(125.9), "2:05");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn test_format_time_bad_input() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn test_seek_time() {
        assert_eq!(seek_time(50.0, 200.0, 120.0), Some(30.0));
        assert_eq!(seek_time(0.0, 200.0, 120.0), Some(0.0));
        assert_eq!(seek_time(250.0, 200.0, 120.0), Some(120.0));
        assert_eq!(seek_time(-10.0, 200.0, 120.0), Some(0.0));
        assert_eq!(seek_time(50.0, 0.0, 120.0), None);
        assert_eq!(seek_time(50.0, 200.0, 0.0), None);
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(15.0, 60.0), 0.25);
        assert_eq!(progress_fraction(15.0, 0.0), 0.0);
        assert_eq!(progress_fraction(90.0, 60.0), 1.0);
    }

    #[test]
    fn test_segment_span() {
        let forward = VideoSegment {
            start: 5.0,
            end: 15.0,
            label: String::new(),
        };
        let (left, width) = segment_span(&forward, 100.0);
        assert!((left - 0.05).abs() < 1e-9);
        assert!((width - 0.10).abs() < 1e-9);

        let reversed = VideoSegment {
            start: 15.0,
            end: 5.0,
            label: String::new(),
        };
        assert_eq!(segment_span(&reversed, 100.0), segment_span(&forward, 100.0));
    }
}
