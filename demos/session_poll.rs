//! Inspect files in the background with a polling session, the way a UI
//! event loop would.
//!
//! Usage:
//!   cargo run --example session_poll -- <input_file> [<another_file>...]

use std::error::Error;
use std::time::Duration;

use bitprobe::{InspectOptions, InspectionSession, InspectionUpdate};

fn main() -> Result<(), Box<dyn Error>> {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    let paths = if paths.is_empty() {
        vec!["input.mp4".to_string()]
    } else {
        paths
    };

    let mut session = InspectionSession::new();

    for path in &paths {
        println!("Loading {path}...");
        let generation = session.load(path, InspectOptions::new());
        println!("  started as load generation {generation}");
    }

    // Only the most recent load's results will surface; earlier loads
    // were superseded the moment the next one started.
    let mut received = 0;
    while received < 2 {
        match session.wait_update(Duration::from_secs(60)) {
            Some(InspectionUpdate::Metadata { metadata, overall }) => {
                received += 1;
                match metadata {
                    Some(metadata) => {
                        println!("Metadata ready: {} ({:.2}s)", metadata.format, metadata.duration.as_secs_f64());
                    }
                    None => println!("Metadata ready: file could not be opened"),
                }
                match overall {
                    Some(overall) => println!("Overall: {:.1} kb/s", overall.kilobits_per_second),
                    None => println!("Overall: unavailable"),
                }
            }
            Some(InspectionUpdate::Profile(profile)) => {
                received += 1;
                println!(
                    "Frame scan ready: {} points from {} samples",
                    profile.points.len(),
                    profile.samples_scanned,
                );
                if let Some(timing) = profile.timing {
                    println!("Effective rate: {:.2} fps", timing.average_fps);
                }
            }
            None => {
                println!("Timed out waiting for updates");
                break;
            }
        }
    }

    Ok(())
}
