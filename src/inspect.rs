//! One-call media inspection.
//!
//! [`inspect`] is the highest-level synchronous entry point: open the file,
//! read metadata, compute the overall bitrate, scan the frame series, and
//! fold every failure along the way into an absent or empty field instead of
//! an error. A broken or exotic file produces a sparse [`Inspection`], never
//! a refusal to inspect.
//!
//! # Example
//!
//! ```no_run
//! use bitprobe::inspect;
//!
//! let report = inspect("input.mp4");
//!
//! if let Some(metadata) = &report.metadata {
//!     println!("format: {}", metadata.format);
//! }
//! if let Some(overall) = report.overall {
//!     println!("overall: {:.1} kb/s", overall.kilobits_per_second);
//! }
//! println!("{} frame points", report.profile.points.len());
//! ```

use std::path::Path;

use crate::bitrate::{BitrateProfile, OverallBitrate};
use crate::config::InspectOptions;
use crate::error::BitprobeError;
use crate::media::MediaFile;
use crate::metadata::MediaMetadata;

/// The complete result of inspecting one media file.
///
/// Every field degrades independently: a file that opens but has no video
/// track still reports metadata and overall bitrate; a file that cannot be
/// opened at all yields the all-empty default.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Inspection {
    /// Container and video metadata. `None` when the file could not be
    /// opened.
    pub metadata: Option<MediaMetadata>,
    /// Whole-file average bitrate. `None` when size or duration was
    /// unavailable.
    pub overall: Option<OverallBitrate>,
    /// Per-frame bitrate profile. Empty when the file has no usable video
    /// samples.
    pub profile: BitrateProfile,
}

/// Inspect a media file with default options.
///
/// Equivalent to [`inspect_with_options`] with no progress callback and no
/// cancellation token.
pub fn inspect<P: AsRef<Path>>(path: P) -> Inspection {
    inspect_with_options(path, &InspectOptions::new())
}

/// Inspect a media file.
///
/// This function never fails. Open errors, missing video tracks, and
/// mid-read demuxer failures all degrade to absent metadata, an absent
/// overall bitrate, or an empty frame series, with the cause logged at
/// `warn` level (or `debug` for routine conditions such as audio-only
/// files and cancellation).
pub fn inspect_with_options<P: AsRef<Path>>(path: P, options: &InspectOptions) -> Inspection {
    let path = path.as_ref();

    let mut media = match MediaFile::open(path) {
        Ok(media) => media,
        Err(error) => {
            log::warn!("Inspection of {} degraded: {error}", path.display());
            return Inspection::default();
        }
    };

    let metadata = media.metadata().clone();
    let overall = overall_or_none(&media);
    let profile = profile_or_empty(&mut media, options);

    Inspection {
        metadata: Some(metadata),
        overall,
        profile,
    }
}

/// Overall bitrate of an opened file, with failure folded to `None`.
pub(crate) fn overall_or_none(media: &MediaFile) -> Option<OverallBitrate> {
    match media.overall_bitrate() {
        Ok(overall) => Some(overall),
        Err(error) => {
            log::warn!(
                "Overall bitrate unavailable for {}: {error}",
                media.path().display()
            );
            None
        }
    }
}

/// Frame scan of an opened file, with failure folded to an empty profile.
///
/// Missing video tracks and cancellation are routine, logged at `debug`;
/// everything else is a `warn`.
pub(crate) fn profile_or_empty(media: &mut MediaFile, options: &InspectOptions) -> BitrateProfile {
    let path = media.path().to_path_buf();

    match media.bitrate_profile_with_options(options) {
        Ok(profile) => profile,
        Err(BitprobeError::TrackUnavailable) => {
            log::debug!("No video track in {}; empty frame series", path.display());
            BitrateProfile::default()
        }
        Err(BitprobeError::Cancelled) => {
            log::debug!("Frame scan of {} cancelled", path.display());
            BitrateProfile::default()
        }
        Err(error) => {
            log::warn!("Frame scan of {} degraded: {error}", path.display());
            BitrateProfile::default()
        }
    }
}
