//! Progress reporting and cancellation support.
//!
//! This module provides [`ProgressCallback`] for monitoring a running frame
//! scan, [`CancellationToken`] for cooperative cancellation, and
//! [`ProgressInfo`] for detailed progress snapshots.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bitprobe::{
//!     BitprobeError, InspectOptions, MediaFile, ProgressCallback, ProgressInfo,
//! };
//!
//! struct PrintProgress;
//!
//! impl ProgressCallback for PrintProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         if let Some(pct) = info.percentage {
//!             println!("scan {pct:.1}% complete");
//!         }
//!     }
//! }
//!
//! let mut media = MediaFile::open("input.mp4")?;
//! let options = InspectOptions::new().with_progress(Arc::new(PrintProgress));
//!
//! let profile = media.bitrate_profile_with_options(&options)?;
//! # Ok::<(), BitprobeError>(())
//! ```

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::{Duration, Instant};

/// A snapshot of frame-scan progress.
///
/// Delivered to [`ProgressCallback::on_progress`] at a cadence controlled
/// by [`InspectOptions::batch_size`](crate::InspectOptions).
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// How many video samples have been scanned so far.
    pub current: u64,
    /// Total samples expected, if the container metadata allowed an
    /// estimate. The estimate comes from duration and nominal frame rate,
    /// so the final `current` may overshoot or undershoot it.
    pub total: Option<u64>,
    /// Completion percentage (0.0 – 100.0), if `total` is known.
    pub percentage: Option<f32>,
    /// Wall-clock time elapsed since the scan started.
    pub elapsed: Duration,
    /// Estimated time remaining, based on current throughput.
    pub estimated_remaining: Option<Duration>,
    /// Media timeline position of the sample currently being processed,
    /// in seconds.
    pub current_timestamp: Option<f64>,
}

/// Trait for receiving progress updates during a frame scan.
///
/// Implementations must be [`Send`] and [`Sync`] because callbacks may be
/// invoked from worker threads in session or async contexts.
///
/// Progress callbacks are **infallible** — they observe but cannot halt
/// the scan. Use [`CancellationToken`] for cooperative cancellation.
pub trait ProgressCallback: Send + Sync {
    /// Called at regular intervals while samples are being scanned.
    fn on_progress(&self, info: &ProgressInfo);
}

/// A no-op implementation that discards all progress notifications.
///
/// This is the default when no callback is configured.
pub(crate) struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _info: &ProgressInfo) {}
}

/// Cooperative cancellation token backed by an [`AtomicBool`].
///
/// Clone this token and share it between threads; call [`cancel`](CancellationToken::cancel)
/// from any thread to request cancellation of the associated scan. The scan
/// loop checks [`is_cancelled`](CancellationToken::is_cancelled) before each
/// unit of work.
///
/// # Example
///
/// ```
/// use bitprobe::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// // From another thread (or a signal handler, etc.):
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request cancellation.
    ///
    /// All clones of this token will observe the cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Internal helper that tracks scan timing and emits callbacks.
pub(crate) struct ProgressTracker {
    callback: Arc<dyn ProgressCallback>,
    total: Option<u64>,
    current: u64,
    batch_size: u64,
    start_time: Instant,
    items_since_last_report: u64,
}

impl ProgressTracker {
    /// Create a new tracker.
    pub(crate) fn new(
        callback: Arc<dyn ProgressCallback>,
        total: Option<u64>,
        batch_size: u64,
    ) -> Self {
        Self {
            callback,
            total,
            current: 0,
            batch_size: batch_size.max(1),
            start_time: Instant::now(),
            items_since_last_report: 0,
        }
    }

    /// Record one scanned sample and fire the callback if the batch
    /// threshold is reached.
    pub(crate) fn advance(&mut self, timestamp: Option<f64>) {
        self.current += 1;
        self.items_since_last_report += 1;

        if self.items_since_last_report >= self.batch_size {
            self.report(timestamp);
            self.items_since_last_report = 0;
        }
    }

    /// Unconditionally emit a final progress report.
    pub(crate) fn finish(&mut self) {
        self.report(None);
    }

    fn report(&self, timestamp: Option<f64>) {
        let elapsed = self.start_time.elapsed();

        let percentage = self
            .total
            .filter(|&t| t > 0)
            .map(|t| (self.current as f32 / t as f32) * 100.0);

        let estimated_remaining = if self.current > 0 {
            self.total.map(|t| {
                let remaining = t.saturating_sub(self.current);
                let per_item = elapsed / self.current as u32;
                per_item * remaining as u32
            })
        } else {
            None
        };

        let info = ProgressInfo {
            current: self.current,
            total: self.total,
            percentage,
            elapsed,
            estimated_remaining,
            current_timestamp: timestamp,
        };

        self.callback.on_progress(&info);
    }
}
