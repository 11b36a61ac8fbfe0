//! FFmpeg console-output control.
//!
//! FFmpeg logs to stderr through its own machinery, outside the Rust
//! [`log`](https://crates.io/crates/log) crate. Scanning slightly damaged
//! files tends to spray codec warnings a caller has no use for; this module
//! exposes FFmpeg's verbosity knob without requiring a direct `ffmpeg-next`
//! dependency.
//!
//! Rust-side diagnostics from `bitprobe` itself go through the `log` crate
//! as usual and are unaffected by these functions.
//!
//! # Example
//!
//! ```no_run
//! use bitprobe::{FfmpegLogLevel, MediaFile, set_ffmpeg_log_level};
//!
//! // Keep stderr quiet while scanning suspect files.
//! set_ffmpeg_log_level(FfmpegLogLevel::Error);
//!
//! let media = MediaFile::open("damaged.mp4").unwrap();
//! ```

use ffmpeg_next::util::log::Level;

/// FFmpeg's internal log verbosity, from `Quiet` (nothing) to `Trace`
/// (everything).
///
/// Mirrors FFmpeg's `AV_LOG_*` levels. FFmpeg's own default is `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfmpegLogLevel {
    /// No output at all.
    Quiet,
    /// Unrecoverable conditions; the process is about to abort.
    Panic,
    /// Unrecoverable errors in a single context.
    Fatal,
    /// Recoverable errors.
    Error,
    /// Suspicious conditions worth knowing about.
    Warning,
    /// Informational messages.
    Info,
    /// Chatty informational messages.
    Verbose,
    /// Debugging output.
    Debug,
    /// Everything, including per-packet noise.
    Trace,
}

impl From<FfmpegLogLevel> for Level {
    fn from(level: FfmpegLogLevel) -> Self {
        match level {
            FfmpegLogLevel::Quiet => Level::Quiet,
            FfmpegLogLevel::Panic => Level::Panic,
            FfmpegLogLevel::Fatal => Level::Fatal,
            FfmpegLogLevel::Error => Level::Error,
            FfmpegLogLevel::Warning => Level::Warning,
            FfmpegLogLevel::Info => Level::Info,
            FfmpegLogLevel::Verbose => Level::Verbose,
            FfmpegLogLevel::Debug => Level::Debug,
            FfmpegLogLevel::Trace => Level::Trace,
        }
    }
}

impl From<Level> for FfmpegLogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Quiet => FfmpegLogLevel::Quiet,
            Level::Panic => FfmpegLogLevel::Panic,
            Level::Fatal => FfmpegLogLevel::Fatal,
            Level::Error => FfmpegLogLevel::Error,
            Level::Warning => FfmpegLogLevel::Warning,
            Level::Info => FfmpegLogLevel::Info,
            Level::Verbose => FfmpegLogLevel::Verbose,
            Level::Debug => FfmpegLogLevel::Debug,
            Level::Trace => FfmpegLogLevel::Trace,
        }
    }
}

/// Set FFmpeg's stderr verbosity. Messages below `level` are suppressed.
pub fn set_ffmpeg_log_level(level: FfmpegLogLevel) {
    ffmpeg_next::util::log::set_level(level.into());
}

/// Read back FFmpeg's current stderr verbosity.
///
/// `None` when FFmpeg reports a level outside the known range.
pub fn get_ffmpeg_log_level() -> Option<FfmpegLogLevel> {
    ffmpeg_next::util::log::get_level()
        .ok()
        .map(FfmpegLogLevel::from)
}
