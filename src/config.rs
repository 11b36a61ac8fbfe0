//! Inspection configuration.
//!
//! [`InspectOptions`] is a builder that threads progress callbacks,
//! cancellation tokens, and other operational settings through inspection
//! methods without polluting every function signature.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bitprobe::{CancellationToken, InspectOptions, ProgressCallback, ProgressInfo};
//!
//! struct LogProgress;
//! impl ProgressCallback for LogProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         println!("{} samples scanned", info.current);
//!     }
//! }
//!
//! let token = CancellationToken::new();
//! let options = InspectOptions::new()
//!     .with_progress(Arc::new(LogProgress))
//!     .with_cancellation(token.clone())
//!     .with_batch_size(100);
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::progress::{CancellationToken, NoOpProgress, ProgressCallback};

/// Configuration for inspection operations.
///
/// Carries optional progress-, cancellation-, and tuning-related settings.
/// Pass a reference to this struct to the `*_with_options` methods on
/// [`MediaFile`](crate::MediaFile), or to
/// [`inspect_with_options`](crate::inspect_with_options) and
/// [`InspectionSession::load`](crate::InspectionSession::load).
///
/// All fields have sensible defaults; a default-constructed value behaves
/// identically to the plain non-options API.
#[derive(Clone)]
pub struct InspectOptions {
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
    /// Cancellation token. `None` means never cancelled.
    pub(crate) cancellation: Option<CancellationToken>,
    /// How often to fire the progress callback (every N samples).
    /// Defaults to 1 (every sample).
    pub(crate) batch_size: u64,
}

impl Debug for InspectOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InspectOptions")
            .field("has_progress", &true)
            .field("has_cancellation", &self.cancellation.is_some())
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectOptions {
    /// Create a new configuration with default settings.
    ///
    /// Defaults: no progress callback, no cancellation, batch size 1.
    pub fn new() -> Self {
        Self {
            progress: Arc::new(NoOpProgress),
            cancellation: None,
            batch_size: 1,
        }
    }

    /// Attach a progress callback.
    ///
    /// The callback is invoked every [`batch_size`](InspectOptions::with_batch_size)
    /// samples during a frame scan.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }

    /// Attach a cancellation token.
    ///
    /// When the token is cancelled, the scan loop will stop and return
    /// [`BitprobeError::Cancelled`](crate::BitprobeError::Cancelled).
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Set how often the progress callback fires.
    ///
    /// A value of 1 means every sample; 100 means every 100th sample.
    /// Clamped to a minimum of 1.
    #[must_use]
    pub fn with_batch_size(mut self, size: u64) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Returns `true` if cancellation has been requested.
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}
