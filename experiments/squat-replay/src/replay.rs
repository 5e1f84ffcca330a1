use std::path::Path;

use anyhow::Context;
use log::info;
use serde::Deserialize;
use squat_base::Vec3;
use squat_counter::{FrameSnapshot, Landmark, LandmarkType, Outcome, RepCounter, SessionState};
use squat_overlay::{RgbCanvas, SkeletonOverlay};

fn default_width() -> usize {
    640
}

fn default_height() -> usize {
    480
}

/// A recorded detection session: image size plus one entry per frame
#[derive(Debug, Deserialize)]
pub struct Recording {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    pub frames: Vec<FrameRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FrameRecord {
    #[serde(default)]
    pub landmarks: Vec<LandmarkRecord>,
}

#[derive(Debug, Deserialize)]
pub struct LandmarkRecord {
    #[serde(rename = "type")]
    pub kind: LandmarkType,
    pub position: [f32; 3],
    #[serde(default)]
    pub in_frame_likelihood: Option<f32>,
}

impl FrameRecord {
    pub fn to_snapshot(&self) -> FrameSnapshot {
        self.landmarks
            .iter()
            .map(|record| {
                let [x, y, z] = record.position;
                Landmark {
                    kind: record.kind,
                    position: Vec3::new(x, y, z),
                    in_frame_likelihood: record.in_frame_likelihood,
                }
            })
            .collect()
    }
}

pub fn parse_recording(json: &str) -> anyhow::Result<Recording> {
    let recording: Recording = serde_json::from_str(json)?;
    Ok(recording)
}

pub fn load_recording(path: &Path) -> anyhow::Result<Recording> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read recording {}", path.display()))?;
    parse_recording(&json).with_context(|| format!("failed to parse recording {}", path.display()))
}

/// Totals of one replay run
#[derive(Debug)]
pub struct ReplaySummary {
    pub frames: usize,
    pub skipped: usize,
    pub reset_frames: usize,
    /// Reps counted across every session in the recording
    pub reps: u32,
    /// Overlay of the final frame
    pub last_canvas: Option<RgbCanvas>,
}

/// Feed every frame through the counter in order, drawing each onto a fresh canvas.
pub fn replay(counter: &RepCounter, overlay: &SkeletonOverlay, recording: &Recording) -> ReplaySummary {
    let mut state = SessionState::new();
    let mut summary = ReplaySummary {
        frames: 0,
        skipped: 0,
        reset_frames: 0,
        reps: 0,
        last_canvas: None,
    };
    let mut shown = (String::new(), String::new(), 0);
    let mut session_reps = 0;

    for (index, record) in recording.frames.iter().enumerate() {
        let frame = record.to_snapshot();
        let evaluation = counter.evaluate(&frame, &mut state);

        summary.frames += 1;
        match evaluation.outcome {
            Outcome::Skipped(_) => summary.skipped += 1,
            Outcome::Reset(_) => summary.reset_frames += 1,
            Outcome::Calibrated | Outcome::Tracking => {}
        }

        // a reset zeroes the session count, so total what each session reached
        if evaluation.up_count > session_reps {
            summary.reps += evaluation.up_count - session_reps;
        }
        session_reps = evaluation.up_count;

        let current = (
            evaluation.line1.clone(),
            evaluation.line2.clone(),
            evaluation.up_count,
        );
        if current != shown {
            info!(
                "frame {}: [{}] [{}] count:{}",
                index, current.0, current.1, current.2
            );
            shown = current;
        }

        let mut canvas = RgbCanvas::new(recording.width, recording.height);
        overlay.draw(&mut canvas, &frame, &evaluation);
        summary.last_canvas = Some(canvas);
    }

    summary
}
