//! Inspect a media file: metadata, overall bitrate, frame series, timing.
//!
//! Usage:
//!   cargo run --example inspect -- <input_file>

use std::error::Error;

use bitprobe::MediaFile;

fn main() -> Result<(), Box<dyn Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.mp4".to_string());

    println!("Opening {input_path}...");
    let mut media = MediaFile::open(&input_path)?;

    // ── Metadata ───────────────────────────────────────────────────
    let metadata = media.metadata().clone();
    println!("Format:   {}", metadata.format);
    println!("Duration: {:.2}s", metadata.duration.as_secs_f64());
    if let Some(size) = metadata.file_size {
        println!("Size:     {:.2} MiB", size as f64 / (1024.0 * 1024.0));
    }
    if let Some(video) = &metadata.video {
        println!(
            "Video:    {} {}x{} @ {:.2} fps (nominal)",
            video.codec, video.width, video.height, video.nominal_frame_rate,
        );
        if let Some(pixel_format) = &video.pixel_format_name {
            println!("Pixels:   {pixel_format}");
        }
    } else {
        println!("Video:    none");
    }

    // ── Validation ─────────────────────────────────────────────────
    let report = media.validate();
    print!("{report}");

    // ── Overall bitrate ────────────────────────────────────────────
    match media.overall_bitrate() {
        Ok(overall) => println!("Overall:  {:.1} kb/s", overall.kilobits_per_second),
        Err(error) => println!("Overall:  unavailable ({error})"),
    }

    // ── Frame series ───────────────────────────────────────────────
    println!("Scanning frame series...");
    let profile = media.bitrate_profile()?;
    println!(
        "Scanned {} samples ({} charted, {} dropped)",
        profile.samples_scanned,
        profile.points.len(),
        profile.samples_dropped,
    );

    if let Some(peak) = profile
        .points
        .iter()
        .max_by(|a, b| a.bitrate.total_cmp(&b.bitrate))
    {
        println!(
            "Peak:     {:.1} kb/s at t={:.2}s",
            peak.bitrate / 1000.0,
            peak.time,
        );
    }

    if let Some(timing) = profile.timing {
        println!(
            "Timing:   {:.2} fps effective (intervals {:.4}s min, {:.4}s max)",
            timing.average_fps, timing.min_interval, timing.max_interval,
        );
    }

    Ok(())
}
