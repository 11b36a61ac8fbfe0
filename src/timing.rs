//! Aggregate timing statistics over a frame-point series.
//!
//! This module derives the *effective* frame rate of a stream — the rate
//! implied by observed presentation-timestamp deltas — along with the
//! extremes of the inter-frame interval. This is deliberately distinct from
//! the container's declared nominal rate
//! ([`VideoMetadata::nominal_frame_rate`](crate::VideoMetadata)): variable
//! frame-rate content and sloppy muxers make the two disagree.
//!
//! # Example
//!
//! ```
//! use bitprobe::{FramePoint, timing_stats};
//!
//! let points = vec![
//!     FramePoint { time: 0.04, bitrate: 240_000.0, keyframe: true },
//!     FramePoint { time: 0.08, bitrate: 180_000.0, keyframe: false },
//! ];
//! let stats = timing_stats(&points).unwrap();
//! assert!((stats.average_fps - 25.0).abs() < 1e-9);
//! ```

use crate::bitrate::FramePoint;

/// Timing statistics derived from an irregular frame-point time series.
///
/// Produced by [`timing_stats`]; absent (`None`) when fewer than two points
/// exist, since no interval can be formed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct TimingStats {
    /// Effective frames per second: the reciprocal of the mean inter-frame
    /// interval, or `0.0` when the mean interval is not positive.
    pub average_fps: f64,
    /// Shortest observed inter-frame interval in seconds.
    pub min_interval: f64,
    /// Longest observed inter-frame interval in seconds.
    pub max_interval: f64,
}

/// Compute [`TimingStats`] from a frame-point series.
///
/// Uses only the `time` values. Intervals are consecutive differences
/// `time[i] - time[i-1]`; the series produced by
/// [`frame_points`](crate::frame_points) guarantees these are all positive.
///
/// Returns `None` when fewer than two points are available.
pub fn timing_stats(points: &[FramePoint]) -> Option<TimingStats> {
    if points.len() < 2 {
        return None;
    }

    let intervals: Vec<f64> = points
        .windows(2)
        .map(|pair| pair[1].time - pair[0].time)
        .collect();

    let average_interval = intervals.iter().sum::<f64>() / intervals.len() as f64;
    let average_fps = if average_interval > 0.0 {
        1.0 / average_interval
    } else {
        0.0
    };

    let min_interval = intervals.iter().copied().fold(f64::INFINITY, f64::min);
    let max_interval = intervals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(TimingStats {
        average_fps,
        min_interval,
        max_interval,
    })
}
