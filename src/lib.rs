//! # bitprobe
//!
//! Inspect the bitrate behaviour of media files — build a per-frame
//! instantaneous bitrate series, derive the effective frame rate, and
//! summarise stream metadata, all without decoding a single pixel.
//!
//! `bitprobe` reads the compressed sample table of a video track (sizes,
//! timestamps, keyframe flags) straight from the demuxer, powered by FFmpeg
//! via the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//! Packet headers are cheap; the codec never runs.
//!
//! ## Quick Start
//!
//! ### Inspect a File
//!
//! ```no_run
//! use bitprobe::inspect;
//!
//! let report = inspect("input.mp4");
//!
//! if let Some(overall) = report.overall {
//!     println!("overall: {:.1} kb/s", overall.kilobits_per_second);
//! }
//! if let Some(timing) = report.profile.timing {
//!     println!("effective rate: {:.2} fps", timing.average_fps);
//! }
//! ```
//!
//! ### Per-Frame Bitrate Series
//!
//! ```no_run
//! use bitprobe::MediaFile;
//!
//! let mut media = MediaFile::open("input.mp4").unwrap();
//! let profile = media.bitrate_profile().unwrap();
//!
//! for point in &profile.points {
//!     println!("{:.3}s  {:.0} bit/s", point.time, point.bitrate);
//! }
//! ```
//!
//! ### Background Inspection (polling)
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use bitprobe::{InspectOptions, InspectionSession};
//!
//! let mut session = InspectionSession::new();
//! session.load("input.mp4", InspectOptions::new());
//!
//! while let Some(update) = session.wait_update(Duration::from_secs(30)) {
//!     println!("{update:?}");
//! }
//! ```
//!
//! ## Features
//!
//! - **Per-frame bitrate series** — instantaneous bitrate from compressed
//!   sample sizes and timestamp deltas, chart-ready, no pixel decode
//! - **Effective frame rate** — timing statistics (mean rate, shortest and
//!   longest inter-frame interval) from observed timestamps, independent of
//!   the container's declared rate
//! - **Overall bitrate** — whole-file average from on-disk size and duration
//! - **Rich metadata** — dimensions, codec, nominal frame rate, colour
//!   description, bit depth, container format, file size
//! - **Never-abort inspection** — [`inspect()`] degrades field by field on
//!   broken or exotic files instead of returning an error
//! - **Background sessions** — detached worker threads with
//!   generation-checked, poll-based result delivery for interactive callers
//! - **Progress & cancellation** — cooperative callbacks and
//!   [`CancellationToken`] for long scans
//! - **Streaming iteration** — lazy [`SampleIterator`] over compressed
//!   samples
//! - **Validation** — structural checks on cached metadata before analysis
//! - **Stream probing** — lightweight [`MediaProbe`] for metadata-only reads
//!
//! ### Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `async` | `inspect_async` and `inspect_stream` for Tokio runtimes |
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system. See the
//! [README](https://github.com/bitprobe/bitprobe#installation) for
//! platform-specific instructions.

pub mod bitrate;
pub mod config;
pub mod error;
pub mod ffmpeg;
pub mod inspect;
pub mod media;
pub mod metadata;
pub mod probe;
pub mod progress;
pub mod sample_iterator;
pub mod session;
#[cfg(feature = "async")]
pub mod task;
pub mod timing;
pub mod validation;

pub use bitrate::{BitrateProfile, FramePoint, OverallBitrate, frame_points, overall_bitrate};
pub use config::InspectOptions;
pub use error::BitprobeError;
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use inspect::{Inspection, inspect, inspect_with_options};
pub use media::MediaFile;
pub use metadata::{MediaMetadata, VideoMetadata};
pub use probe::MediaProbe;
pub use progress::{CancellationToken, ProgressCallback, ProgressInfo};
pub use sample_iterator::{Sample, SampleIterator};
pub use session::{InspectionSession, InspectionUpdate};
#[cfg(feature = "async")]
pub use task::{InspectionFuture, InspectionStream, inspect_async, inspect_stream};
pub use timing::{TimingStats, timing_stats};
pub use validation::ValidationReport;
