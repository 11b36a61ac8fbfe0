//! Metadata extraction integration tests.
//!
//! Tests require fixture files from `tests/fixtures/generate_fixtures.sh`.

use std::path::Path;
use std::time::Duration;

use bitprobe::{MediaFile, MediaProbe};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

fn sample_video_mkv_path() -> &'static str {
    "tests/fixtures/sample_video.mkv"
}

// ── Container-level metadata ───────────────────────────────────────

#[test]
fn duration_matches_the_fixture() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    let metadata = media.metadata();

    // The fixture is five seconds long; allow for container rounding.
    assert!(metadata.duration >= Duration::from_millis(4500));
    assert!(metadata.duration <= Duration::from_millis(5500));
}

#[test]
fn format_names_the_container() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    assert!(
        media.metadata().format.contains("mp4"),
        "unexpected format: {}",
        media.metadata().format
    );
}

#[test]
fn mkv_container_is_recognised() {
    let path = sample_video_mkv_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    assert!(
        media.metadata().format.contains("matroska"),
        "unexpected format: {}",
        media.metadata().format
    );
}

#[test]
fn file_size_matches_the_filesystem() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    let on_disk = std::fs::metadata(path).expect("stat fixture").len();

    assert_eq!(media.metadata().file_size, Some(on_disk));
}

// ── Video stream metadata ──────────────────────────────────────────

#[test]
fn video_dimensions_and_codec() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    let video = media.metadata().video.as_ref().expect("video metadata");

    assert_eq!(video.width, 640);
    assert_eq!(video.height, 360);
    assert_eq!(video.codec, "h264");
}

#[test]
fn nominal_frame_rate_matches_the_fixture() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    let video = media.metadata().video.as_ref().expect("video metadata");

    assert!(
        (video.nominal_frame_rate - 30.0).abs() < 0.5,
        "expected ~30 fps, got {}",
        video.nominal_frame_rate
    );
}

#[test]
fn optional_video_fields_are_accessible() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let media = MediaFile::open(path).expect("open fixture");
    let video = media.metadata().video.as_ref().expect("video metadata");

    // These may be None depending on the encoder; just confirm x264
    // output declares a pixel format.
    assert!(video.pixel_format_name.is_some());
    let _ = &video.color_space;
    let _ = &video.color_range;
    let _ = &video.color_primaries;
    let _ = &video.color_transfer;
    let _ = &video.bits_per_raw_sample;
}

// ── Lightweight probe ──────────────────────────────────────────────

#[test]
fn probe_agrees_with_open() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let probed = MediaProbe::probe(path).expect("probe fixture");
    let media = MediaFile::open(path).expect("open fixture");
    let opened = media.metadata();

    assert_eq!(probed.duration, opened.duration);
    assert_eq!(probed.format, opened.format);
    assert_eq!(probed.file_size, opened.file_size);
    assert_eq!(
        probed.video.as_ref().map(|v| (v.width, v.height)),
        opened.video.as_ref().map(|v| (v.width, v.height)),
    );
}
