//! Per-frame bitrate extraction and whole-file bitrate computation.
//!
//! The central artifact of this module is the [`BitrateProfile`]: a series of
//! [`FramePoint`]s where each point carries the instantaneous bitrate implied
//! by one compressed video sample and the time elapsed since its predecessor.
//! No pixel data is ever decoded; everything here works from packet sizes and
//! timestamps alone.
//!
//! # Example
//!
//! ```no_run
//! use bitprobe::{BitprobeError, MediaFile};
//!
//! let mut media = MediaFile::open("input.mp4")?;
//! let profile = media.bitrate_profile()?;
//!
//! for point in &profile.points {
//!     println!("{:.3}s  {:.0} bit/s", point.time, point.bitrate);
//! }
//! if let Some(timing) = profile.timing {
//!     println!("effective rate: {:.2} fps", timing.average_fps);
//! }
//! # Ok::<(), BitprobeError>(())
//! ```

use crate::config::InspectOptions;
use crate::error::BitprobeError;
use crate::media::MediaFile;
use crate::metadata::MediaMetadata;
use crate::progress::ProgressTracker;
use crate::sample_iterator::Sample;
use crate::timing::{TimingStats, timing_stats};

/// One point on the instantaneous-bitrate timeline.
///
/// The bitrate of a point is attributed to the interval *ending* at its
/// timestamp: `bitrate = size_in_bits / (time - previous_time)`. The first
/// sample of a stream therefore never produces a point, because it has no
/// predecessor to measure against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePoint {
    /// Presentation time of the sample, in seconds.
    pub time: f64,
    /// Instantaneous bitrate in bits per second.
    pub bitrate: f64,
    /// Whether the sample was a keyframe (sync sample).
    pub keyframe: bool,
}

/// Convert a raw sample series into instantaneous bitrate points.
///
/// Each sample after the first yields one point, **except** samples whose
/// timestamp does not strictly increase over the previous sample's. Those are
/// dropped rather than allowed to produce an infinite or negative bitrate;
/// decode-order B-frames and duplicated timestamps in sloppy containers make
/// such samples a routine occurrence, not an error.
///
/// The reference clock always advances to the last *observed* timestamp,
/// dropped or not, so a later well-behaved sample is measured against its
/// true predecessor.
///
/// The output series is strictly increasing in time and safe to feed to
/// [`timing_stats`].
///
/// # Example
///
/// ```
/// use bitprobe::{Sample, frame_points};
///
/// let samples = vec![
///     Sample { time: 0.00, size: 1000, keyframe: true },
///     Sample { time: 0.04, size: 1200, keyframe: false },
///     Sample { time: 0.08, size: 900, keyframe: false },
/// ];
///
/// let points = frame_points(samples);
/// assert_eq!(points.len(), 2);
/// assert!((points[0].bitrate - 240_000.0).abs() < 1e-6);
/// assert!((points[1].bitrate - 180_000.0).abs() < 1e-6);
/// ```
pub fn frame_points<I>(samples: I) -> Vec<FramePoint>
where
    I: IntoIterator<Item = Sample>,
{
    let mut points = Vec::new();
    let mut previous_time: Option<f64> = None;

    for sample in samples {
        if let Some(previous) = previous_time {
            let interval = sample.time - previous;
            if sample.time > previous && interval > 0.0 {
                points.push(FramePoint {
                    time: sample.time,
                    bitrate: sample.size as f64 * 8.0 / interval,
                    keyframe: sample.keyframe,
                });
            }
        }
        previous_time = Some(sample.time);
    }

    points
}

/// The complete result of a frame scan.
///
/// Produced by [`MediaFile::bitrate_profile`] and the higher-level
/// [`inspect`](crate::inspect()) entry points.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct BitrateProfile {
    /// Instantaneous bitrate points, strictly increasing in time.
    pub points: Vec<FramePoint>,
    /// Timing statistics over `points`, or `None` when fewer than two
    /// points were produced.
    pub timing: Option<TimingStats>,
    /// Total number of timed video samples read from the container.
    pub samples_scanned: u64,
    /// Samples discarded for non-increasing timestamps. The first sample
    /// of a stream is not counted here; it is consumed as the reference
    /// point, not dropped.
    pub samples_dropped: u64,
}

impl BitrateProfile {
    /// Returns `true` when the scan produced no bitrate points.
    ///
    /// An empty profile is a legitimate outcome for audio-only files and
    /// single-frame streams, not a failure.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Drain the sample stream of `media` and build a [`BitrateProfile`].
///
/// Honors the cancellation token and progress callback in `options`.
pub(crate) fn scan_bitrate(
    media: &mut MediaFile,
    options: &InspectOptions,
) -> Result<BitrateProfile, BitprobeError> {
    let estimated_total = estimate_sample_count(media.metadata());
    log::debug!(
        "Scanning video samples of {} (estimated total: {estimated_total:?})",
        media.path().display()
    );

    let mut tracker = ProgressTracker::new(
        options.progress.clone(),
        estimated_total,
        options.batch_size,
    );

    let mut samples: Vec<Sample> = Vec::new();
    for result in media.sample_iter()? {
        if options.is_cancelled() {
            return Err(BitprobeError::Cancelled);
        }

        let sample = result?;
        tracker.advance(Some(sample.time));
        samples.push(sample);
    }
    tracker.finish();

    let samples_scanned = samples.len() as u64;
    let points = frame_points(samples);
    let timing = timing_stats(&points);
    let samples_dropped = samples_scanned
        .saturating_sub(1)
        .saturating_sub(points.len() as u64);

    log::debug!(
        "Frame scan complete: {samples_scanned} samples, {} points, {samples_dropped} dropped",
        points.len()
    );

    Ok(BitrateProfile {
        points,
        timing,
        samples_scanned,
        samples_dropped,
    })
}

/// Guess how many video samples the scan will see, for progress reporting.
///
/// Duration times nominal frame rate. VFR content makes this approximate;
/// callers must treat it as a hint only.
fn estimate_sample_count(metadata: &MediaMetadata) -> Option<u64> {
    let video = metadata.video.as_ref()?;
    if video.nominal_frame_rate <= 0.0 {
        return None;
    }

    let estimate = metadata.duration.as_secs_f64() * video.nominal_frame_rate;
    (estimate >= 1.0).then_some(estimate.round() as u64)
}

/// Whole-file average bitrate, derived from container size and duration.
///
/// Unlike [`FramePoint::bitrate`] this covers *all* streams in the file,
/// audio and container overhead included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct OverallBitrate {
    /// Average bitrate in kilobits per second.
    pub kilobits_per_second: f64,
}

/// Compute the overall average bitrate of a file.
///
/// `size_bytes` is the total file size on disk and `duration_seconds` the
/// container duration; the result is `size_bytes * 8 / duration / 1000`.
///
/// # Example
///
/// ```
/// use bitprobe::overall_bitrate;
///
/// let overall = overall_bitrate(10_485_760, 80.0)?;
/// assert!((overall.kilobits_per_second - 1048.576).abs() < 1e-9);
/// # Ok::<(), bitprobe::BitprobeError>(())
/// ```
///
/// # Errors
///
/// Returns [`BitprobeError::DurationUnavailable`] when `duration_seconds`
/// is zero, negative, or not finite, since no meaningful rate exists.
pub fn overall_bitrate(
    size_bytes: u64,
    duration_seconds: f64,
) -> Result<OverallBitrate, BitprobeError> {
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(BitprobeError::DurationUnavailable);
    }

    Ok(OverallBitrate {
        kilobits_per_second: size_bytes as f64 * 8.0 / duration_seconds / 1000.0,
    })
}
