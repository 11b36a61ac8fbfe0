//! Polling-based inspection sessions for interactive callers.
//!
//! [`InspectionSession`] runs inspections on detached background threads so
//! a UI or event loop never blocks on container I/O. Each [`load`] starts
//! two independent workers against the same path: one summarises metadata
//! and the overall bitrate, the other scans the frame series. The two
//! results arrive in whichever order they finish.
//!
//! Loading a new file while a previous inspection is still running does not
//! interrupt it; the session bumps its load generation and [`poll`] silently
//! discards any result stamped with an older generation. State can never be
//! corrupted by a slow scan finishing after the user has moved on.
//!
//! [`load`]: InspectionSession::load
//! [`poll`]: InspectionSession::poll
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use bitprobe::{InspectOptions, InspectionSession, InspectionUpdate};
//!
//! let mut session = InspectionSession::new();
//! session.load("input.mp4", InspectOptions::new());
//!
//! while let Some(update) = session.wait_update(Duration::from_secs(30)) {
//!     match update {
//!         InspectionUpdate::Metadata { metadata, overall } => {
//!             println!("metadata ready: {metadata:?}, overall {overall:?}");
//!         }
//!         InspectionUpdate::Profile(profile) => {
//!             println!("{} frame points", profile.points.len());
//!         }
//!     }
//! }
//! ```

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, Sender};

use crate::bitrate::{BitrateProfile, OverallBitrate};
use crate::config::InspectOptions;
use crate::inspect::{overall_or_none, profile_or_empty};
use crate::media::MediaFile;
use crate::metadata::MediaMetadata;

/// One incremental result from a background inspection.
///
/// The two variants correspond to the two independent workers started by
/// [`InspectionSession::load`] and may arrive in either order.
#[derive(Debug, Clone)]
pub enum InspectionUpdate {
    /// Container metadata and overall bitrate.
    ///
    /// `metadata` is `None` when the file could not be opened; `overall`
    /// is `None` when size or duration was unavailable.
    Metadata {
        /// Container and video metadata.
        metadata: Option<MediaMetadata>,
        /// Whole-file average bitrate.
        overall: Option<OverallBitrate>,
    },
    /// The completed frame scan. Empty when the file has no usable video
    /// samples or could not be opened.
    Profile(BitrateProfile),
}

/// A generation-stamped update in flight between a worker and [`poll`].
///
/// [`poll`]: InspectionSession::poll
struct Envelope {
    generation: u64,
    update: InspectionUpdate,
}

/// Runs inspections in the background and hands out generation-checked
/// results.
///
/// The session itself is single-threaded state: [`load`] and [`poll`] are
/// called from the owning thread, while the actual I/O happens on detached
/// worker threads communicating through an unbounded channel. Dropping the
/// session drops the channel; workers still running simply find no receiver
/// and exit.
///
/// [`load`]: InspectionSession::load
/// [`poll`]: InspectionSession::poll
pub struct InspectionSession {
    current_generation: u64,
    sender: Sender<Envelope>,
    receiver: Receiver<Envelope>,
}

impl InspectionSession {
    /// Create an idle session with no inspection in flight.
    pub fn new() -> Self {
        let (sender, receiver) = channel::unbounded();
        Self {
            current_generation: 0,
            sender,
            receiver,
        }
    }

    /// Start inspecting `path` in the background.
    ///
    /// Spawns two detached worker threads: a metadata worker (container
    /// open, metadata summary, overall bitrate) and a frame-scan worker.
    /// Each reopens the file independently so neither blocks the other.
    ///
    /// Any previously loaded inspection is superseded: it keeps running to
    /// completion but its results will be discarded by [`poll`]. Callers
    /// who want the old scan to also stop working can pass a cancellation
    /// token in `options` and cancel it themselves.
    ///
    /// Returns the new load generation, which stamps all updates this load
    /// will produce.
    ///
    /// [`poll`]: InspectionSession::poll
    pub fn load<P: AsRef<Path>>(&mut self, path: P, options: InspectOptions) -> u64 {
        let path = path.as_ref().to_path_buf();

        self.current_generation += 1;
        let generation = self.current_generation;

        log::debug!(
            "Load generation {generation}: inspecting {} in background",
            path.display()
        );

        let metadata_sender = self.sender.clone();
        let metadata_path = path.clone();
        thread::spawn(move || {
            let update = metadata_worker(&metadata_path);
            // Send failure just means the session was dropped.
            let _ = metadata_sender.send(Envelope { generation, update });
        });

        let scan_sender = self.sender.clone();
        thread::spawn(move || {
            let update = scan_worker(&path, &options);
            let _ = scan_sender.send(Envelope { generation, update });
        });

        generation
    }

    /// Fetch the next pending update without blocking.
    ///
    /// Returns `None` when no update is currently queued. Updates from
    /// superseded load generations are dropped on the floor; only results
    /// for the most recent [`load`](InspectionSession::load) are returned.
    pub fn poll(&mut self) -> Option<InspectionUpdate> {
        loop {
            let envelope = self.receiver.try_recv().ok()?;
            if envelope.generation == self.current_generation {
                return Some(envelope.update);
            }
            log::debug!(
                "Discarding stale update from load generation {}",
                envelope.generation
            );
        }
    }

    /// Fetch the next pending update, waiting up to `timeout`.
    ///
    /// Behaves like [`poll`](InspectionSession::poll) but blocks while the
    /// queue is empty. Returns `None` when the timeout elapses first.
    pub fn wait_update(&mut self, timeout: Duration) -> Option<InspectionUpdate> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let envelope = self.receiver.recv_timeout(remaining).ok()?;
            if envelope.generation == self.current_generation {
                return Some(envelope.update);
            }
            log::debug!(
                "Discarding stale update from load generation {}",
                envelope.generation
            );
        }
    }

    /// The generation stamped on updates from the most recent load.
    ///
    /// Zero until the first [`load`](InspectionSession::load).
    pub fn current_generation(&self) -> u64 {
        self.current_generation
    }
}

impl Default for InspectionSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata worker body: open, summarise, estimate the overall bitrate.
pub(crate) fn metadata_worker(path: &Path) -> InspectionUpdate {
    match MediaFile::open(path) {
        Ok(media) => InspectionUpdate::Metadata {
            overall: overall_or_none(&media),
            metadata: Some(media.metadata().clone()),
        },
        Err(error) => {
            log::warn!("Metadata load of {} failed: {error}", path.display());
            InspectionUpdate::Metadata {
                metadata: None,
                overall: None,
            }
        }
    }
}

/// Frame-scan worker body: open a private demuxer and drain the track.
pub(crate) fn scan_worker(path: &Path, options: &InspectOptions) -> InspectionUpdate {
    match MediaFile::open(path) {
        Ok(mut media) => InspectionUpdate::Profile(profile_or_empty(&mut media, options)),
        Err(error) => {
            log::warn!("Frame scan of {} could not open file: {error}", path.display());
            InspectionUpdate::Profile(BitrateProfile::default())
        }
    }
}
