//! Sequential access to a video track's compressed samples.
//!
//! This module provides [`SampleIterator`] for walking the primary video
//! track of an opened container one compressed sample at a time, without
//! decoding any pixel data. Each yielded [`Sample`] carries the sample's
//! presentation time in seconds, its compressed size in bytes, and its
//! sync-sample (keyframe) flag.
//!
//! Samples are reported in decode/storage order exactly as the container
//! exposes them — timestamps may repeat or go backwards for streams with
//! frame reordering. Downstream consumers such as
//! [`frame_points`](crate::frame_points) are responsible for filtering
//! non-monotonic pairs.
//!
//! # Example
//!
//! ```no_run
//! use bitprobe::{BitprobeError, MediaFile};
//!
//! let mut media = MediaFile::open("input.mp4")?;
//! for sample in media.sample_iter()? {
//!     let sample = sample?;
//!     println!("t={:.3}s size={}B key={}", sample.time, sample.size, sample.keyframe);
//! }
//! # Ok::<(), BitprobeError>(())
//! ```

use ffmpeg_next::{Error as FfmpegError, Packet, Rational};

use crate::error::BitprobeError;
use crate::media::MediaFile;

/// One compressed access unit of the video track.
///
/// Produced by [`SampleIterator`]; consumed by the bitrate extraction
/// pipeline. Never holds the sample payload itself, only its timing and
/// size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Presentation timestamp in seconds (DTS when no PTS is recorded).
    pub time: f64,
    /// Compressed payload size in bytes.
    pub size: u64,
    /// Whether this sample is a sync sample (keyframe).
    pub keyframe: bool,
}

/// A lazy, single-pass iterator over the video track's compressed samples.
///
/// Obtained from [`MediaFile::sample_iter`]. Reading advances the demuxer
/// cursor; once exhausted, a fresh [`MediaFile`] must be opened to read the
/// track again.
pub struct SampleIterator<'a> {
    media: &'a mut MediaFile,
    stream_index: usize,
    time_base: Rational,
    done: bool,
}

impl<'a> SampleIterator<'a> {
    /// Open a sample cursor on the primary video track.
    ///
    /// # Errors
    ///
    /// - [`BitprobeError::TrackUnavailable`] if the container has no video
    ///   track.
    /// - [`BitprobeError::ReaderInitFailed`] if the track cannot be read
    ///   sequentially (missing stream entry or degenerate time base).
    pub(crate) fn new(media: &'a mut MediaFile) -> Result<Self, BitprobeError> {
        let stream_index = media
            .video_stream_index
            .ok_or(BitprobeError::TrackUnavailable)?;

        let time_base = media
            .input_context
            .stream(stream_index)
            .ok_or_else(|| {
                BitprobeError::ReaderInitFailed(format!(
                    "video stream {stream_index} is not readable"
                ))
            })?
            .time_base();

        if time_base.denominator() == 0 {
            return Err(BitprobeError::ReaderInitFailed(format!(
                "video stream {stream_index} has a degenerate time base {}/{}",
                time_base.numerator(),
                time_base.denominator(),
            )));
        }

        log::debug!(
            "Opening sample cursor (stream={stream_index}, time_base={}/{})",
            time_base.numerator(),
            time_base.denominator(),
        );

        Ok(Self {
            media,
            stream_index,
            time_base,
            done: false,
        })
    }
}

impl<'a> Iterator for SampleIterator<'a> {
    type Item = Result<Sample, BitprobeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut packet = Packet::empty();
        loop {
            match packet.read(&mut self.media.input_context) {
                Ok(()) => {
                    if packet.stream() as usize != self.stream_index {
                        continue;
                    }

                    // Prefer PTS; some containers only record DTS for
                    // streams without reordering. Untimed packets carry no
                    // usable interval and are skipped.
                    let Some(timestamp) = packet.pts().or_else(|| packet.dts()) else {
                        continue;
                    };

                    return Some(Ok(Sample {
                        time: timestamp_to_seconds(timestamp, self.time_base),
                        size: packet.size() as u64,
                        keyframe: packet.is_key(),
                    }));
                }
                Err(FfmpegError::Eof) => {
                    self.done = true;
                    return None;
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(BitprobeError::from(error)));
                }
            }
        }
    }
}

/// Rescale a raw timestamp from the stream time base to seconds.
///
/// The time base denominator is validated non-zero at cursor creation.
fn timestamp_to_seconds(timestamp: i64, time_base: Rational) -> f64 {
    timestamp as f64 * time_base.numerator() as f64 / time_base.denominator() as f64
}
