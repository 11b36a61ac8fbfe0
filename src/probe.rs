//! Lightweight media file probing.
//!
//! [`MediaProbe`] extracts metadata from a media file without keeping the
//! demuxer open. This is useful for quickly checking a file (e.g. before
//! offering it for full inspection) without the cost of retaining an FFmpeg
//! input context.
//!
//! For the frame scan and bitrate analysis, use
//! [`MediaFile::open`](crate::MediaFile::open) instead.

use std::path::Path;

use crate::error::BitprobeError;
use crate::media::MediaFile;
use crate::metadata::MediaMetadata;

/// Lightweight media file probe.
///
/// Opens the file, extracts metadata, and immediately closes the demuxer.
/// The resulting [`MediaMetadata`] is identical to what
/// [`MediaFile::metadata`](crate::MediaFile::metadata) returns, but without
/// keeping the file open for sample reading.
///
/// # Example
///
/// ```no_run
/// use bitprobe::MediaProbe;
///
/// let metadata = MediaProbe::probe("input.mp4")?;
/// println!("Duration: {:?}, format: {}", metadata.duration, metadata.format);
/// if let Some(video) = &metadata.video {
///     println!("Video: {}x{} ({})", video.width, video.height, video.codec);
/// }
/// # Ok::<(), bitprobe::BitprobeError>(())
/// ```
pub struct MediaProbe;

impl MediaProbe {
    /// Probe a media file and return its metadata.
    ///
    /// Opens the file, extracts all available metadata, and closes the
    /// demuxer. The returned [`MediaMetadata`] is owned and fully
    /// independent of any file handle.
    ///
    /// # Errors
    ///
    /// Returns [`BitprobeError::FileOpen`] if the file cannot be opened or
    /// recognised as a media file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bitprobe::MediaProbe;
    ///
    /// let metadata = MediaProbe::probe("video.mkv")?;
    /// println!("{metadata:?}");
    /// # Ok::<(), bitprobe::BitprobeError>(())
    /// ```
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<MediaMetadata, BitprobeError> {
        let media = MediaFile::open(path)?;
        Ok(media.metadata.clone())
    }
}
