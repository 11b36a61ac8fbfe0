//! Dump the per-frame bitrate series as CSV, ready for plotting.
//!
//! Usage:
//!   cargo run --example bitrate_csv -- <input_file> > bitrate.csv

use std::error::Error;
use std::sync::Arc;

use bitprobe::{InspectOptions, MediaFile, ProgressCallback, ProgressInfo};

/// Prints scan progress to stderr so stdout stays clean CSV.
struct StderrProgress;

impl ProgressCallback for StderrProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        match info.percentage {
            Some(pct) => eprint!("\rScanning... {pct:.0}%"),
            None => eprint!("\rScanning... {} samples", info.current),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.mp4".to_string());

    let mut media = MediaFile::open(&input_path)?;

    let options = InspectOptions::new()
        .with_progress(Arc::new(StderrProgress))
        .with_batch_size(25);

    let profile = media.bitrate_profile_with_options(&options)?;
    eprintln!();

    println!("time_seconds,bitrate_bits_per_second,keyframe");
    for point in &profile.points {
        println!(
            "{:.6},{:.0},{}",
            point.time,
            point.bitrate,
            if point.keyframe { 1 } else { 0 },
        );
    }

    eprintln!(
        "Wrote {} points ({} samples scanned, {} dropped)",
        profile.points.len(),
        profile.samples_scanned,
        profile.samples_dropped,
    );

    Ok(())
}
