use squat_counter::{Evaluation, FrameSnapshot, LandmarkType};

use crate::{DepthRange, GREEN, OverlayConfig, Renderer, Rgb, WHITE, YELLOW, depth_color};

use LandmarkType::*;

/// Left side bones, drawn green
pub const LEFT_BODY: [(LandmarkType, LandmarkType); 11] = [
    (LeftShoulder, LeftElbow),
    (LeftElbow, LeftWrist),
    (LeftShoulder, LeftHip),
    (LeftHip, LeftKnee),
    (LeftKnee, LeftAnkle),
    (LeftWrist, LeftThumb),
    (LeftWrist, LeftPinky),
    (LeftWrist, LeftIndex),
    (LeftIndex, LeftPinky),
    (LeftAnkle, LeftHeel),
    (LeftHeel, LeftFootIndex),
];

/// Right side bones, drawn yellow
pub const RIGHT_BODY: [(LandmarkType, LandmarkType); 11] = [
    (RightShoulder, RightElbow),
    (RightElbow, RightWrist),
    (RightShoulder, RightHip),
    (RightHip, RightKnee),
    (RightKnee, RightAnkle),
    (RightWrist, RightThumb),
    (RightWrist, RightPinky),
    (RightWrist, RightIndex),
    (RightIndex, RightPinky),
    (RightAnkle, RightHeel),
    (RightHeel, RightFootIndex),
];

/// Draws one frame's skeleton and the counter's status lines.
#[derive(Debug, Clone, Default)]
pub struct SkeletonOverlay {
    config: OverlayConfig,
}

impl SkeletonOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Draw landmarks, status text and bones. A frame with no landmarks draws nothing.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        frame: &FrameSnapshot,
        evaluation: &Evaluation,
    ) {
        if frame.is_empty() {
            return;
        }

        let range = self.depth_range(renderer, frame);

        for landmark in frame.iter() {
            let color = self.shade(WHITE, landmark.position.z, range);
            renderer.draw_point(landmark.position, color);
        }

        let count = format!("count:{}", evaluation.up_count);
        for (line, text) in [
            (1, evaluation.line1.as_str()),
            (2, evaluation.line2.as_str()),
            (3, count.as_str()),
        ] {
            if !text.is_empty() {
                renderer.draw_text(text, line);
            }
        }

        self.draw_bones(renderer, frame, &LEFT_BODY, GREEN, range);
        self.draw_bones(renderer, frame, &RIGHT_BODY, YELLOW, range);

        if self.config.show_in_frame_likelihood() {
            for landmark in frame.iter() {
                if let Some(likelihood) = landmark.in_frame_likelihood {
                    renderer.draw_label(&format!("{:.2}", likelihood), landmark.position.xy());
                }
            }
        }
    }

    fn draw_bones<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        frame: &FrameSnapshot,
        bones: &[(LandmarkType, LandmarkType)],
        color: Rgb,
        range: DepthRange,
    ) {
        for &(from, to) in bones {
            let (Some(start), Some(end)) = (frame.get(from), frame.get(to)) else {
                continue;
            };
            let z = (start.position.z + end.position.z) / 2.0;
            renderer.draw_line(start.position, end.position, self.shade(color, z, range));
        }
    }

    fn depth_range<R: Renderer + ?Sized>(&self, renderer: &R, frame: &FrameSnapshot) -> DepthRange {
        if self.config.rescale_z_for_visualization() {
            let (z_min, z_max) = frame
                .iter()
                .map(|l| l.position.z)
                .fold((f32::MAX, f32::MIN), |(lo, hi), z| (lo.min(z), hi.max(z)));
            DepthRange::from_observed(z_min, z_max)
        } else {
            DepthRange::symmetric(renderer.width() as f32)
        }
    }

    fn shade(&self, base: Rgb, z: f32, range: DepthRange) -> Rgb {
        if self.config.visualize_z() {
            depth_color(z, range)
        } else {
            base
        }
    }
}
