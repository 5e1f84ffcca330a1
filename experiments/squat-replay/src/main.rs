mod replay;

use anyhow::anyhow;
use log::info;
use replay::{load_recording, replay};
use squat_base::{init_file_logger, init_stdout_logger};
use squat_counter::{CounterConfig, RepCounter};
use squat_overlay::{OverlayConfig, SkeletonOverlay};
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    match env::var("SQUAT_LOG_DIR") {
        Ok(dir) => init_file_logger(dir)?,
        Err(_) => init_stdout_logger(),
    }

    let frames_path: PathBuf = env::var("SQUAT_FRAMES_PATH")
        .unwrap_or_else(|_| "frames.json".to_string())
        .into();

    let config = match env::var("SQUAT_CONFIG_PATH") {
        Ok(path) => CounterConfig::load(&path)?,
        Err(_) => CounterConfig::default(),
    };
    info!("Counter config: {:?}", config);
    let counter = RepCounter::new(config)?;

    let overlay = SkeletonOverlay::new(
        OverlayConfig::default()
            .with_show_in_frame_likelihood(env::var("SQUAT_SHOW_LIKELIHOOD").is_ok())
            .with_visualize_z(env::var("SQUAT_VISUALIZE_Z").is_ok()),
    );

    info!("Loading recording {}", frames_path.display());
    let recording = load_recording(&frames_path)?;
    info!(
        "{} frames at {}x{}",
        recording.frames.len(),
        recording.width,
        recording.height
    );

    let summary = replay(&counter, &overlay, &recording);
    info!(
        "Replayed {} frames ({} skipped, {} reset): {} reps",
        summary.frames, summary.skipped, summary.reset_frames, summary.reps
    );

    if let (Ok(path), Some(canvas)) = (env::var("SQUAT_SNAPSHOT_PATH"), summary.last_canvas) {
        let image = crates_image::RgbImage::from_raw(
            recording.width as u32,
            recording.height as u32,
            canvas.into_rgb(),
        )
        .ok_or_else(|| anyhow!("canvas does not match {}x{}", recording.width, recording.height))?;
        image.save(&path)?;
        info!("Saved last frame to {}", path);
    }

    log::logger().flush();
    Ok(())
}
