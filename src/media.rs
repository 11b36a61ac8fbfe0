//! Core [`MediaFile`] implementation.
//!
//! `MediaFile` is the main entry point for the crate. It opens a media
//! file, extracts and caches metadata, and provides the sample cursor and
//! bitrate analysis methods that the higher-level [`inspect`](crate::inspect())
//! and [`InspectionSession`](crate::InspectionSession) layers build on.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{format::context::Input, media::Type};

use crate::{
    bitrate::{self, BitrateProfile, OverallBitrate},
    config::InspectOptions,
    error::BitprobeError,
    metadata::{MediaMetadata, video_metadata_from_stream},
    sample_iterator::SampleIterator,
    validation::ValidationReport,
};

/// An opened media file, ready for inspection.
///
/// Created via [`MediaFile::open`], this struct holds the demuxer context
/// and cached metadata. Analysis methods that read samples take `&mut self`
/// because they advance the underlying demuxer cursor; a cursor that has
/// reached end of stream requires a fresh `MediaFile` to scan again.
///
/// # Example
///
/// ```no_run
/// use bitprobe::{BitprobeError, MediaFile};
///
/// let mut media = MediaFile::open("input.mp4")?;
/// println!("Duration: {:?}", media.metadata().duration);
///
/// let profile = media.bitrate_profile()?;
/// println!("{} bitrate points", profile.points.len());
/// # Ok::<(), BitprobeError>(())
/// ```
pub struct MediaFile {
    /// The opened FFmpeg input (demuxer) context.
    pub(crate) input_context: Input,
    /// Cached metadata extracted at open time.
    pub(crate) metadata: MediaMetadata,
    /// Index of the best video stream, if one exists.
    pub(crate) video_stream_index: Option<usize>,
    /// Path to the opened media file (kept for logging and error messages).
    pub(crate) file_path: PathBuf,
}

impl Debug for MediaFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MediaFile")
            .field("metadata", &self.metadata)
            .field("video_stream_index", &self.video_stream_index)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl MediaFile {
    /// Open a media file for inspection.
    ///
    /// Initializes FFmpeg (idempotent), opens the file, locates the best
    /// video stream, and caches container and video metadata. No samples
    /// are read and nothing is decoded.
    ///
    /// # Errors
    ///
    /// Returns [`BitprobeError::FileOpen`] if the file cannot be opened or
    /// is not a recognisable media container.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bitprobe::{BitprobeError, MediaFile};
    ///
    /// let media = MediaFile::open("video.mp4")?;
    /// # Ok::<(), BitprobeError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BitprobeError> {
        let path = path.as_ref();
        let canonical_path = path.to_path_buf();

        log::debug!("Opening media file: {}", canonical_path.display());

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| BitprobeError::FileOpen {
            path: canonical_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        // Open the media file.
        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| BitprobeError::FileOpen {
                path: canonical_path.clone(),
                reason: error.to_string(),
            })?;

        // Locate the best video stream. A file without one is still
        // inspectable; the frame scan just yields nothing.
        let video_stream_index = input_context
            .streams()
            .best(Type::Video)
            .map(|stream| stream.index());

        // Container-level duration arrives in microseconds.
        let duration_microseconds = input_context.duration();
        let duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64)
        } else {
            Duration::ZERO
        };

        // Container format name.
        let format = input_context.format().name().to_string();

        // On-disk size feeds the overall bitrate estimate.
        let file_size = match fs::metadata(path) {
            Ok(stat) => Some(stat.len()),
            Err(error) => {
                log::debug!("Could not stat {}: {error}", canonical_path.display());
                None
            }
        };

        let video = video_stream_index.and_then(|index| {
            input_context
                .stream(index)
                .and_then(|stream| video_metadata_from_stream(&stream))
        });

        let metadata = MediaMetadata {
            video,
            duration,
            format,
            file_size,
        };

        log::info!(
            "Opened media file: {} (format={}, duration={:.2}s, video={})",
            canonical_path.display(),
            metadata.format,
            metadata.duration.as_secs_f64(),
            if metadata.video.is_some() { "yes" } else { "no" },
        );

        if let Some(video) = &metadata.video {
            log::debug!(
                "Best video stream: index={}, {}x{}, {:.2} fps (nominal), codec={}",
                video.stream_index,
                video.width,
                video.height,
                video.nominal_frame_rate,
                video.codec,
            );
        }

        Ok(Self {
            input_context,
            metadata,
            video_stream_index,
            file_path: canonical_path,
        })
    }

    /// Get a reference to the cached media metadata.
    ///
    /// Metadata is extracted once during [`open`](MediaFile::open) and
    /// does not require additional reads.
    pub fn metadata(&self) -> &MediaMetadata {
        &self.metadata
    }

    /// The path this file was opened from.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Create a lazy iterator over the primary video track's samples.
    ///
    /// The iterator yields [`Sample`](crate::Sample) structs containing
    /// presentation time, compressed size, and keyframe flag for each
    /// sample without decoding.
    ///
    /// # Errors
    ///
    /// Returns [`BitprobeError::TrackUnavailable`] if the container has no
    /// video track, or [`BitprobeError::ReaderInitFailed`] if the track
    /// cannot be read sequentially.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bitprobe::{BitprobeError, MediaFile};
    ///
    /// let mut media = MediaFile::open("input.mp4")?;
    /// for sample in media.sample_iter()? {
    ///     let sample = sample?;
    ///     println!("t={:.3}s size={}B key={}", sample.time, sample.size, sample.keyframe);
    /// }
    /// # Ok::<(), BitprobeError>(())
    /// ```
    pub fn sample_iter(&mut self) -> Result<SampleIterator<'_>, BitprobeError> {
        SampleIterator::new(self)
    }

    /// Scan the video track and build a [`BitrateProfile`].
    ///
    /// Equivalent to [`bitrate_profile_with_options`](MediaFile::bitrate_profile_with_options)
    /// with default options (no progress, no cancellation).
    ///
    /// # Errors
    ///
    /// Returns [`BitprobeError::TrackUnavailable`] for files without video,
    /// or any demuxer error encountered mid-scan.
    pub fn bitrate_profile(&mut self) -> Result<BitrateProfile, BitprobeError> {
        self.bitrate_profile_with_options(&InspectOptions::new())
    }

    /// Scan the video track and build a [`BitrateProfile`], with progress
    /// reporting and cancellation.
    ///
    /// Reads every sample of the primary video track in decode order,
    /// derives instantaneous bitrate points, and aggregates timing
    /// statistics. The demuxer cursor is left at end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`BitprobeError::Cancelled`] if the token in `options` is
    /// cancelled mid-scan, [`BitprobeError::TrackUnavailable`] for files
    /// without video, or any demuxer error encountered mid-scan.
    pub fn bitrate_profile_with_options(
        &mut self,
        options: &InspectOptions,
    ) -> Result<BitrateProfile, BitprobeError> {
        bitrate::scan_bitrate(self, options)
    }

    /// Compute the whole-file average bitrate from size and duration.
    ///
    /// Uses the cached metadata only; no samples are read.
    ///
    /// # Errors
    ///
    /// Returns [`BitprobeError::DurationUnavailable`] when the container
    /// declares no positive duration or the file size could not be
    /// determined.
    pub fn overall_bitrate(&self) -> Result<OverallBitrate, BitprobeError> {
        let size = self
            .metadata
            .file_size
            .ok_or(BitprobeError::DurationUnavailable)?;

        bitrate::overall_bitrate(size, self.metadata.duration.as_secs_f64())
    }

    /// Validate the media file and return a report.
    ///
    /// Inspects cached metadata for potential issues such as a missing
    /// video stream, zero dimensions, or an undeclared duration. Does not
    /// re-read the file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bitprobe::{BitprobeError, MediaFile};
    ///
    /// let media = MediaFile::open("input.mp4")?;
    /// let report = media.validate();
    /// println!("{report}");
    /// # Ok::<(), BitprobeError>(())
    /// ```
    pub fn validate(&self) -> ValidationReport {
        crate::validation::validate_metadata(&self.metadata)
    }
}
