use log::{debug, info};
use squat_base::Vec3;

use crate::{
    CounterConfig, CounterError, FrameSnapshot, LandmarkType, joint_angle,
    state::{Motion, Phase, Prompt, SessionState},
};

/// Landmarks every evaluation needs, in the order `evaluate` reads them.
/// A frame lacking any of them is skipped.
pub const REQUIRED_LANDMARKS: [LandmarkType; 8] = [
    LandmarkType::RightHip,
    LandmarkType::RightKnee,
    LandmarkType::RightAnkle,
    LandmarkType::LeftShoulder,
    LandmarkType::RightShoulder,
    LandmarkType::LeftWrist,
    LandmarkType::RightWrist,
    LandmarkType::LeftAnkle,
];

/// Why a frame was not evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyFrame,
    Missing(LandmarkType),
    LowLikelihood(LandmarkType),
}

/// What a single evaluation did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Frame ignored, session left untouched.
    Skipped(SkipReason),
    /// A posture check failed and the session was reset.
    Reset(Prompt),
    /// Baseline captured on this frame; counting starts.
    Calibrated,
    /// Counting was already active and the frame was tracked.
    Tracking,
}

/// Display output of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub line1: String,
    pub line2: String,
    pub up_count: u32,
    pub outcome: Outcome,
}

impl Evaluation {
    fn from_state(state: &SessionState, outcome: Outcome) -> Self {
        Self {
            line1: state.status_line1(),
            line2: state.status_line2(),
            up_count: state.up_count(),
            outcome,
        }
    }
}

struct Joints {
    right_hip: Vec3<f32>,
    right_knee: Vec3<f32>,
    right_ankle: Vec3<f32>,
    left_shoulder: Vec3<f32>,
    right_shoulder: Vec3<f32>,
    left_wrist: Vec3<f32>,
    right_wrist: Vec3<f32>,
    left_ankle: Vec3<f32>,
}

/// Squat rep counter.
///
/// Stateless apart from its configuration; all per-session state lives in
/// the `SessionState` handed to `evaluate`, so one counter can serve any
/// number of sessions.
#[derive(Debug, Clone, Default)]
pub struct RepCounter {
    config: CounterConfig,
}

impl RepCounter {
    /// Create a counter, rejecting an invalid config.
    pub fn new(config: CounterConfig) -> Result<Self, CounterError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Evaluate one frame against `state`.
    ///
    /// Posture checks run in priority order: straight knee, hands behind
    /// head, stance width. The first failure resets the session. The knee
    /// and stance checks only gate calibration; once counting, dropping the
    /// hands is the only way to reset. A frame with missing required
    /// landmarks leaves the session exactly as it was.
    pub fn evaluate(&self, frame: &FrameSnapshot, state: &mut SessionState) -> Evaluation {
        let outcome = match self.joints(frame) {
            Ok(joints) => self.step(&joints, state),
            Err(reason) => {
                debug!("frame skipped: {:?}", reason);
                Outcome::Skipped(reason)
            }
        };
        Evaluation::from_state(state, outcome)
    }

    fn joints(&self, frame: &FrameSnapshot) -> Result<Joints, SkipReason> {
        if frame.is_empty() {
            return Err(SkipReason::EmptyFrame);
        }

        let floor = self.config.min_in_frame_likelihood();
        let position = |kind: LandmarkType| -> Result<Vec3<f32>, SkipReason> {
            let landmark = frame.get(kind).ok_or(SkipReason::Missing(kind))?;
            match (floor, landmark.in_frame_likelihood) {
                (Some(min), Some(likelihood)) if likelihood < min => {
                    Err(SkipReason::LowLikelihood(kind))
                }
                _ => Ok(landmark.position),
            }
        };

        let mut positions = [Vec3::zero(); REQUIRED_LANDMARKS.len()];
        for (slot, &kind) in positions.iter_mut().zip(REQUIRED_LANDMARKS.iter()) {
            *slot = position(kind)?;
        }

        // same order as REQUIRED_LANDMARKS
        let [
            right_hip,
            right_knee,
            right_ankle,
            left_shoulder,
            right_shoulder,
            left_wrist,
            right_wrist,
            left_ankle,
        ] = positions;
        Ok(Joints {
            right_hip,
            right_knee,
            right_ankle,
            left_shoulder,
            right_shoulder,
            left_wrist,
            right_wrist,
            left_ankle,
        })
    }

    fn step(&self, j: &Joints, state: &mut SessionState) -> Outcome {
        let counting = state.is_counting();

        let knee = joint_angle(j.right_hip, j.right_knee, j.right_ankle);
        if (180.0 - knee).abs() > self.config.knee_tolerance_deg() && !counting {
            return reset(state, Prompt::StandUpStraight);
        }

        // y grows downward: a wrist below its shoulder means the hands came off the head
        if j.left_wrist.y > j.left_shoulder.y || j.right_wrist.y > j.right_shoulder.y {
            return reset(state, Prompt::HandsBehindHead);
        }

        let shoulder_span = j.left_shoulder.x - j.right_shoulder.x;
        let ankle_span = j.left_ankle.x - j.right_ankle.x;
        let ratio = if shoulder_span != 0.0 {
            ankle_span / shoulder_span
        } else {
            0.0
        };
        if ratio < self.config.min_stance_ratio() && !counting {
            return reset(state, Prompt::SpreadFeet);
        }

        let current = j.left_shoulder.midpoint(j.right_shoulder).y;

        let mut outcome = Outcome::Tracking;
        if !counting {
            state.shoulder_baseline = current;
            state.min_movement = (j.right_ankle.y - j.right_hip.y) / self.config.movement_divisor();
            state.phase = Phase::Ready;
            state.last_height = current;
            state.prompt = Some(Prompt::Ready);
            debug!(
                "calibrated: shoulder baseline {:.1}, min movement {:.1}",
                state.shoulder_baseline, state.min_movement
            );
            outcome = Outcome::Calibrated;
        }

        track_descent(state, current);
        track_ascent(state, current);

        outcome
    }
}

fn reset(state: &mut SessionState, prompt: Prompt) -> Outcome {
    if state.prompt != Some(prompt) || state.is_counting() {
        debug!(
            "session reset ({}), discarding {} reps",
            prompt, state.up_count
        );
    }
    state.reset();
    state.prompt = Some(prompt);
    Outcome::Reset(prompt)
}

fn track_descent(state: &mut SessionState, current: f32) {
    if current - state.last_height > state.min_movement {
        if state.phase != Phase::Down {
            state.phase = Phase::Down;
            state.down_count += 1;
            state.motion = Some(Motion::StartDown);
        } else {
            state.motion = Some(Motion::Descending);
        }
        state.last_height = current;
    }
}

// Runs after track_descent, against the height it may just have updated.
fn track_ascent(state: &mut SessionState, current: f32) {
    if state.last_height - current > state.min_movement {
        if state.phase != Phase::Up && state.up_count < state.down_count {
            state.phase = Phase::Up;
            state.up_count += 1;
            state.motion = Some(Motion::StartUp);
            info!("rep {} counted", state.up_count);
        } else {
            state.motion = Some(Motion::Ascending);
        }
        state.last_height = current;
    }
}
