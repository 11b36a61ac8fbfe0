//! Media file validation.
//!
//! Provides [`MediaFile::validate`](crate::MediaFile::validate) which checks
//! the cached metadata of an opened file and returns a [`ValidationReport`]
//! describing its structure and any conditions that will limit what an
//! inspection can produce.
//!
//! # Example
//!
//! ```no_run
//! use bitprobe::MediaFile;
//!
//! let media = MediaFile::open("input.mp4")?;
//! let report = media.validate();
//! if report.is_valid() {
//!     println!("File is valid");
//! } else {
//!     for warning in &report.warnings {
//!         println!("Warning: {warning}");
//!     }
//! }
//! # Ok::<(), bitprobe::BitprobeError>(())
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

use crate::metadata::MediaMetadata;

/// Summary of media file validation.
///
/// Produced by [`MediaFile::validate`](crate::MediaFile::validate). Contains
/// lists of informational notices, warnings, and errors found during
/// validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Informational notices (not problems).
    pub info: Vec<String>,
    /// Non-fatal conditions that limit inspection results.
    pub warnings: Vec<String>,
    /// Defects in the file's declared structure.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` if no errors were found.
    ///
    /// Warnings do not affect this result — only errors make the report
    /// invalid.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of issues (info + warnings + errors).
    pub fn issue_count(&self) -> usize {
        self.info.len() + self.warnings.len() + self.errors.len()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for item in &self.info {
            writeln!(f, "[INFO] {item}")?;
        }
        for item in &self.warnings {
            writeln!(f, "[WARN] {item}")?;
        }
        for item in &self.errors {
            writeln!(f, "[ERROR] {item}")?;
        }
        if self.issue_count() == 0 {
            writeln!(f, "No issues found.")?;
        }
        Ok(())
    }
}

/// Run validation checks on the cached metadata.
///
/// This function is called by [`MediaFile::validate`](crate::MediaFile::validate).
pub(crate) fn validate_metadata(metadata: &MediaMetadata) -> ValidationReport {
    let mut report = ValidationReport::default();

    // ── Stream presence ────────────────────────────────────────────
    if metadata.video.is_none() {
        report
            .info
            .push("No video stream found — the frame-bitrate series will be empty".to_string());
    }

    // ── Container-level checks ─────────────────────────────────────
    if metadata.duration == Duration::ZERO {
        report
            .warnings
            .push("Media duration is undeclared — the overall bitrate will be unavailable".to_string());
    }

    if metadata.file_size.is_none() {
        report
            .warnings
            .push("File size could not be determined — the overall bitrate will be unavailable".to_string());
    }

    // ── Video checks ───────────────────────────────────────────────
    if let Some(video) = &metadata.video {
        if video.width == 0 || video.height == 0 {
            report.errors.push(format!(
                "Invalid video dimensions: {}×{}",
                video.width, video.height,
            ));
        }

        if video.nominal_frame_rate <= 0.0 {
            report.warnings.push(
                "Nominal frame rate is zero or negative — sample-count estimates will be unavailable"
                    .to_string(),
            );
        } else if video.nominal_frame_rate > 240.0 {
            report.warnings.push(format!(
                "Unusually high nominal frame rate ({:.1} fps) — the frame scan may take a while",
                video.nominal_frame_rate,
            ));
        }

        let no_colour_description = video.color_space.is_none()
            && video.color_range.is_none()
            && video.color_primaries.is_none()
            && video.color_transfer.is_none();
        if no_colour_description {
            report
                .info
                .push("No colour description declared".to_string());
        }

        report.info.push(format!(
            "Video: {} {}×{} @ {:.2} fps (nominal)",
            video.codec, video.width, video.height, video.nominal_frame_rate,
        ));
    }

    report
}
