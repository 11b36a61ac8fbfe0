//! Sample iteration and full-scan integration tests.
//!
//! Tests require fixture files from `tests/fixtures/generate_fixtures.sh`.
//! The video fixture is encoded without B-frames, so packet order and
//! presentation order coincide and the scan sees monotone timestamps.

use std::path::Path;

use bitprobe::{MediaFile, Sample, frame_points, inspect};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

fn collect_samples(media: &mut MediaFile) -> Vec<Sample> {
    media
        .sample_iter()
        .expect("sample iterator")
        .map(|result| result.expect("sample"))
        .collect()
}

// ── Sample iteration ───────────────────────────────────────────────

#[test]
fn iterator_yields_the_fixture_frames() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let samples = collect_samples(&mut media);

    // Five seconds at 30 fps.
    assert!(
        samples.len() >= 100 && samples.len() <= 200,
        "unexpected sample count: {}",
        samples.len()
    );
}

#[test]
fn samples_have_payloads_and_timestamps() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let samples = collect_samples(&mut media);

    for sample in &samples {
        assert!(sample.size > 0, "empty packet at t={}", sample.time);
        assert!(sample.time >= 0.0, "negative timestamp {}", sample.time);
    }
}

#[test]
fn samples_arrive_in_media_order() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let samples = collect_samples(&mut media);

    for pair in samples.windows(2) {
        assert!(
            pair[1].time > pair[0].time,
            "timestamps must increase: {} then {}",
            pair[0].time,
            pair[1].time,
        );
    }
}

#[test]
fn keyframes_are_flagged() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let samples = collect_samples(&mut media);

    let keyframes = samples.iter().filter(|s| s.keyframe).count();
    assert!(keyframes >= 1, "at least the first frame is a keyframe");
    assert!(
        keyframes < samples.len(),
        "not every frame should be a keyframe"
    );
    assert!(samples[0].keyframe, "the stream starts on a keyframe");
}

// ── Full scans ─────────────────────────────────────────────────────

#[test]
fn profile_accounts_for_every_sample() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let profile = media.bitrate_profile().expect("scan fixture");

    assert!(profile.samples_scanned > 0);
    assert_eq!(
        profile.points.len() as u64,
        profile.samples_scanned - 1 - profile.samples_dropped,
        "every sample is either charted, dropped, or the first",
    );
}

#[test]
fn clean_fixture_drops_nothing() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let profile = media.bitrate_profile().expect("scan fixture");

    assert_eq!(profile.samples_dropped, 0);
    assert_eq!(profile.points.len() as u64, profile.samples_scanned - 1);
}

#[test]
fn profile_points_are_strictly_increasing() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let profile = media.bitrate_profile().expect("scan fixture");

    for pair in profile.points.windows(2) {
        assert!(pair[1].time > pair[0].time);
    }
    for point in &profile.points {
        assert!(point.bitrate > 0.0, "zero bitrate at t={}", point.time);
        assert!(point.bitrate.is_finite());
    }
}

#[test]
fn profile_matches_a_manual_conversion() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let samples = collect_samples(&mut media);
    let manual = frame_points(samples);

    let mut reopened = MediaFile::open(path).expect("reopen fixture");
    let profile = reopened.bitrate_profile().expect("scan fixture");

    assert_eq!(profile.points, manual);
}

#[test]
fn repeated_scans_are_identical() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut first = MediaFile::open(path).expect("open fixture");
    let first_profile = first.bitrate_profile().expect("first scan");

    let mut second = MediaFile::open(path).expect("reopen fixture");
    let second_profile = second.bitrate_profile().expect("second scan");

    assert_eq!(first_profile.points, second_profile.points);
    assert_eq!(first_profile.samples_scanned, second_profile.samples_scanned);
    assert_eq!(first_profile.timing, second_profile.timing);
}

#[test]
fn effective_fps_matches_the_fixture() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut media = MediaFile::open(path).expect("open fixture");
    let profile = media.bitrate_profile().expect("scan fixture");

    let timing = profile.timing.expect("timing stats");
    assert!(
        (timing.average_fps - 30.0).abs() < 0.5,
        "expected ~30 fps, got {}",
        timing.average_fps
    );
    assert!(timing.min_interval > 0.0);
    assert!(timing.max_interval >= timing.min_interval);
}

// ── Whole-file average ─────────────────────────────────────────────

#[test]
fn overall_bitrate_follows_size_and_duration() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    let overall = media.overall_bitrate().expect("overall bitrate");

    let size = media.metadata().file_size.expect("file size") as f64;
    let seconds = media.metadata().duration.as_secs_f64();
    let expected = size * 8.0 / seconds / 1000.0;

    assert!((overall.kilobits_per_second - expected).abs() < 1e-6);
    assert!(overall.kilobits_per_second > 0.0);
}

// ── One-shot inspection ────────────────────────────────────────────

#[test]
fn inspect_returns_a_complete_report() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let report = inspect(path);

    let metadata = report.metadata.expect("metadata");
    assert!(metadata.video.is_some());

    let overall = report.overall.expect("overall bitrate");
    assert!(overall.kilobits_per_second > 0.0);

    assert!(!report.profile.is_empty());
    assert!(report.profile.timing.is_some());
}
