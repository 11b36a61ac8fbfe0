//! Error types for the `bitprobe` crate.
//!
//! This module defines [`BitprobeError`], the unified error type returned by
//! all fallible operations in the crate. Every failure the analysis pipeline
//! can hit is recoverable: callers such as [`inspect`](crate::inspect()) convert
//! these errors into empty/unavailable results instead of aborting an
//! inspection run.

use std::path::PathBuf;

use ffmpeg_next::Error as FfmpegError;
use thiserror::Error;

/// The unified error type for all `bitprobe` operations.
///
/// Every public method that can fail returns `Result<T, BitprobeError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BitprobeError {
    /// The media file could not be opened or recognised as a container.
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::MediaFile::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The container holds no video track to read samples from.
    ///
    /// Non-fatal: the frame-bitrate pipeline yields an empty series.
    #[error("No video track found in file")]
    TrackUnavailable,

    /// The sequential sample cursor could not be created.
    ///
    /// Raised for corrupt or degenerate tracks (for example a zero
    /// time-base denominator) and when a background task cannot reopen
    /// the container for sequential reading. Non-fatal: treated as
    /// "no chart data" by the inspection boundary.
    #[error("Sample reader could not be initialised: {0}")]
    ReaderInitFailed(String),

    /// The container duration is missing, non-positive, or the file size
    /// could not be determined, so no overall bitrate can be estimated.
    ///
    /// Non-fatal: the overall bitrate is reported as unknown.
    #[error("Media duration or file size unavailable")]
    DurationUnavailable,

    /// An error originating from the FFmpeg libraries mid-read.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// The operation was cancelled via a
    /// [`CancellationToken`](crate::CancellationToken).
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<FfmpegError> for BitprobeError {
    fn from(error: FfmpegError) -> Self {
        BitprobeError::FfmpegError(error.to_string())
    }
}
