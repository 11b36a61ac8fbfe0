//! Async inspection example (feature = "async").
//!
//! Usage:
//!   cargo run --features=async --example async_inspect -- <input_file>

use std::error::Error;

use tokio_stream::StreamExt;

use bitprobe::{InspectOptions, InspectionUpdate, inspect_async, inspect_stream};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.mp4".to_string());

    // --- One-shot await -------------------------------------------------------
    println!("Inspecting {input_path} in one await...");
    let report = inspect_async(&input_path, InspectOptions::new()).await;

    if let Some(metadata) = &report.metadata {
        println!("Format: {} ({:.2}s)", metadata.format, metadata.duration.as_secs_f64());
    }
    if let Some(overall) = report.overall {
        println!("Overall: {:.1} kb/s", overall.kilobits_per_second);
    }
    println!("{} frame points\n", report.profile.points.len());

    // --- Incremental stream ---------------------------------------------------
    println!("Inspecting again, incrementally...");
    let mut updates = inspect_stream(&input_path, InspectOptions::new());

    while let Some(update) = updates.next().await {
        match update {
            InspectionUpdate::Metadata { metadata, overall } => {
                println!(
                    "  metadata arrived (video: {}, overall: {})",
                    metadata
                        .and_then(|m| m.video)
                        .map_or("none".to_string(), |v| v.codec),
                    overall.map_or("unavailable".to_string(), |o| {
                        format!("{:.1} kb/s", o.kilobits_per_second)
                    }),
                );
            }
            InspectionUpdate::Profile(profile) => {
                println!(
                    "  frame scan arrived ({} points, {} samples)",
                    profile.points.len(),
                    profile.samples_scanned,
                );
            }
        }
    }
    println!("Stream ended.");

    Ok(())
}
