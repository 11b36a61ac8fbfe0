//! Async inspection for tokio-based callers.
//!
//! Available with the `async` feature. [`inspect_async`] resolves to a
//! complete [`Inspection`] in one await; [`inspect_stream`] delivers the
//! metadata summary and the frame-scan result incrementally as each worker
//! finishes, mirroring [`InspectionSession`](crate::InspectionSession) for
//! async consumers.
//!
//! All container I/O runs via `tokio::task::spawn_blocking` — demuxing is
//! CPU- and disk-heavy FFmpeg work that would otherwise tie up the Tokio
//! runtime's cooperative task budget.
//!
//! # Example
//!
//! ```no_run
//! use bitprobe::{InspectOptions, inspect_async};
//!
//! # async fn example() {
//! let report = inspect_async("input.mp4", InspectOptions::new()).await;
//! println!("{} frame points", report.profile.points.len());
//! # }
//! ```

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;
use tokio_stream::Stream;

use crate::config::InspectOptions;
use crate::inspect::{Inspection, inspect_with_options};
use crate::session::{InspectionUpdate, metadata_worker, scan_worker};

/// An [`InspectionStream`] sends exactly one metadata update and one
/// profile update, so the channel never applies backpressure.
const UPDATE_CHANNEL_CAPACITY: usize = 2;

/// A future that resolves to a completed [`Inspection`].
///
/// Created via [`inspect_async`]. The actual container work runs on a
/// blocking thread; polling this future drives it to completion. Like the
/// synchronous [`inspect`](crate::inspect()), it never fails: a worker that
/// cannot produce a result resolves to the all-empty default.
pub struct InspectionFuture {
    handle: JoinHandle<Inspection>,
}

impl Future for InspectionFuture {
    type Output = Inspection;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx).map(|result| {
            result.unwrap_or_else(|error| {
                log::warn!("Background inspection task failed: {error}");
                Inspection::default()
            })
        })
    }
}

/// Inspect a media file on a blocking thread, without blocking the runtime.
///
/// Must be called from within a Tokio runtime.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use bitprobe::{CancellationToken, InspectOptions, inspect_async};
///
/// # async fn example() {
/// let token = CancellationToken::new();
/// let options = InspectOptions::new().with_cancellation(token.clone());
///
/// let report = inspect_async("input.mp4", options).await;
/// if let Some(overall) = report.overall {
///     println!("overall: {:.1} kb/s", overall.kilobits_per_second);
/// }
/// # }
/// ```
pub fn inspect_async<P: AsRef<Path>>(path: P, options: InspectOptions) -> InspectionFuture {
    let path = path.as_ref().to_path_buf();

    let handle = tokio::task::spawn_blocking(move || inspect_with_options(&path, &options));

    InspectionFuture { handle }
}

/// A stream of incremental inspection results from background workers.
///
/// Implements [`tokio_stream::Stream`] so it can be used with
/// [`StreamExt`](tokio_stream::StreamExt) combinators such as `next()`.
/// Yields exactly two [`InspectionUpdate`]s, in whichever order the
/// metadata worker and the frame-scan worker finish, then ends.
///
/// Dropping the stream closes the channel; workers still running simply
/// find no receiver when they complete.
///
/// # Example
///
/// ```no_run
/// use tokio_stream::StreamExt;
///
/// use bitprobe::{InspectOptions, InspectionUpdate, inspect_stream};
///
/// # async fn example() {
/// let mut updates = inspect_stream("input.mp4", InspectOptions::new());
///
/// while let Some(update) = updates.next().await {
///     match update {
///         InspectionUpdate::Metadata { metadata, .. } => {
///             println!("metadata ready: {metadata:?}");
///         }
///         InspectionUpdate::Profile(profile) => {
///             println!("{} frame points", profile.points.len());
///         }
///     }
/// }
/// # }
/// ```
pub struct InspectionStream {
    receiver: Receiver<InspectionUpdate>,
    #[allow(dead_code)]
    metadata_handle: JoinHandle<()>,
    #[allow(dead_code)]
    scan_handle: JoinHandle<()>,
}

impl Stream for InspectionStream {
    type Item = InspectionUpdate;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

/// Start an incremental inspection and return its update stream.
///
/// Spawns the same two independent workers as
/// [`InspectionSession::load`](crate::InspectionSession::load), each on a
/// blocking thread with its own demuxer.
///
/// Must be called from within a Tokio runtime.
pub fn inspect_stream<P: AsRef<Path>>(path: P, options: InspectOptions) -> InspectionStream {
    let path = path.as_ref().to_path_buf();
    let (sender, receiver) = tokio::sync::mpsc::channel(UPDATE_CHANNEL_CAPACITY);

    let metadata_sender = sender.clone();
    let metadata_path = path.clone();
    let metadata_handle = tokio::task::spawn_blocking(move || {
        let update = metadata_worker(&metadata_path);
        let _ = metadata_sender.blocking_send(update);
    });

    let scan_handle = tokio::task::spawn_blocking(move || {
        let update = scan_worker(&path, &options);
        let _ = sender.blocking_send(update);
    });

    InspectionStream {
        receiver,
        metadata_handle,
        scan_handle,
    }
}
