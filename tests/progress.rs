//! Progress reporting and cancellation tests.
//!
//! Run `tests/fixtures/generate_fixtures.sh` first to create the media
//! fixtures; tests that need them are skipped when the files are absent.

use std::path::Path;
use std::sync::{Arc, Mutex};

use bitprobe::{
    BitprobeError, CancellationToken, InspectOptions, MediaFile, ProgressCallback, ProgressInfo,
};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

/// Records every progress notification for later inspection.
struct RecordingProgress {
    infos: Mutex<Vec<ProgressInfo>>,
}

impl RecordingProgress {
    fn new() -> Self {
        Self {
            infos: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<ProgressInfo> {
        self.infos.lock().expect("progress mutex").clone()
    }
}

impl ProgressCallback for RecordingProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        self.infos.lock().expect("progress mutex").push(info.clone());
    }
}

// ── CancellationToken ──────────────────────────────────────────────

#[test]
fn new_token_is_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_observed() {
    let token = CancellationToken::new();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn clones_share_cancellation_state() {
    let token = CancellationToken::new();
    let clone = token.clone();

    clone.cancel();
    assert!(token.is_cancelled(), "cancel via a clone must be visible");
}

#[test]
fn default_token_is_not_cancelled() {
    let token = CancellationToken::default();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let token = CancellationToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

// ── Progress during a scan ─────────────────────────────────────────

#[test]
fn scan_reports_progress_for_every_sample() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let recorder = Arc::new(RecordingProgress::new());
    let options = InspectOptions::new()
        .with_progress(recorder.clone())
        .with_batch_size(1);

    let mut media = MediaFile::open(path).expect("open fixture");
    let profile = media
        .bitrate_profile_with_options(&options)
        .expect("scan fixture");

    let infos = recorder.recorded();
    // One report per sample, plus the final report from the scan's end.
    assert_eq!(infos.len() as u64, profile.samples_scanned + 1);

    for pair in infos.windows(2) {
        assert!(
            pair[1].current >= pair[0].current,
            "progress must not move backwards: {} then {}",
            pair[0].current,
            pair[1].current,
        );
    }

    let last = infos.last().expect("at least the final report");
    assert_eq!(last.current, profile.samples_scanned);
}

#[test]
fn batch_size_limits_report_cadence() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let recorder = Arc::new(RecordingProgress::new());
    // Far larger than the fixture's frame count, so only the final
    // report fires.
    let options = InspectOptions::new()
        .with_progress(recorder.clone())
        .with_batch_size(1_000_000);

    let mut media = MediaFile::open(path).expect("open fixture");
    let profile = media
        .bitrate_profile_with_options(&options)
        .expect("scan fixture");

    let infos = recorder.recorded();
    assert_eq!(infos.len(), 1, "only the final report should fire");
    assert_eq!(infos[0].current, profile.samples_scanned);
}

#[test]
fn progress_carries_media_timestamps() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let recorder = Arc::new(RecordingProgress::new());
    let options = InspectOptions::new()
        .with_progress(recorder.clone())
        .with_batch_size(1);

    let mut media = MediaFile::open(path).expect("open fixture");
    media
        .bitrate_profile_with_options(&options)
        .expect("scan fixture");

    let infos = recorder.recorded();
    let timestamped = infos
        .iter()
        .filter(|info| info.current_timestamp.is_some())
        .count();
    assert!(
        timestamped > 0,
        "per-sample reports should carry a media timestamp"
    );
}

#[test]
fn progress_estimates_totals_from_metadata() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let recorder = Arc::new(RecordingProgress::new());
    let options = InspectOptions::new()
        .with_progress(recorder.clone())
        .with_batch_size(1);

    let mut media = MediaFile::open(path).expect("open fixture");
    media
        .bitrate_profile_with_options(&options)
        .expect("scan fixture");

    let infos = recorder.recorded();
    let first = infos.first().expect("at least one report");
    if let Some(total) = first.total {
        assert!(total > 0);
        assert!(first.percentage.is_some());
    }
}

// ── Cancellation during a scan ─────────────────────────────────────

#[test]
fn pre_cancelled_token_stops_the_scan_immediately() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let token = CancellationToken::new();
    token.cancel();

    let options = InspectOptions::new().with_cancellation(token);

    let mut media = MediaFile::open(path).expect("open fixture");
    let result = media.bitrate_profile_with_options(&options);

    assert!(
        matches!(result, Err(BitprobeError::Cancelled)),
        "expected Cancelled, got {result:?}"
    );
}

#[test]
fn uncancelled_token_does_not_interfere() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let options = InspectOptions::new().with_cancellation(CancellationToken::new());

    let mut media = MediaFile::open(path).expect("open fixture");
    let profile = media
        .bitrate_profile_with_options(&options)
        .expect("scan with idle token");
    assert!(profile.samples_scanned > 0);
}
