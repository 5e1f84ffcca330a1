use std::fmt;

/// Where a session is in the squat cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No baseline captured yet; posture checks gate calibration.
    #[default]
    Uncalibrated,
    /// Calibrated and standing; no movement registered since.
    Ready,
    Down,
    Up,
}

/// Guidance shown on the first status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    StandUpStraight,
    HandsBehindHead,
    SpreadFeet,
    Ready,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Prompt::StandUpStraight => "stand up straight",
            Prompt::HandsBehindHead => "hold hands behind head",
            Prompt::SpreadFeet => "spread feet shoulder-width apart",
            Prompt::Ready => "ready",
        })
    }
}

/// Movement cue shown on the second status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    StartDown,
    Descending,
    StartUp,
    Ascending,
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Motion::StartDown => "start down",
            Motion::Descending => "descending",
            Motion::StartUp => "start up",
            Motion::Ascending => "ascending",
        })
    }
}

/// Counter state carried from frame to frame within one detection session.
///
/// `Default` is the reset value: uncalibrated, zero counts, empty status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub(crate) phase: Phase,
    pub(crate) up_count: u32,
    pub(crate) down_count: u32,
    pub(crate) shoulder_baseline: f32,
    pub(crate) min_movement: f32,
    pub(crate) last_height: f32,
    pub(crate) prompt: Option<Prompt>,
    pub(crate) motion: Option<Motion>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to uncalibrated with zero counts and empty status lines
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_counting(&self) -> bool {
        self.phase != Phase::Uncalibrated
    }

    pub fn is_up(&self) -> bool {
        self.phase == Phase::Up
    }

    pub fn is_down(&self) -> bool {
        self.phase == Phase::Down
    }

    /// Completed reps
    pub fn up_count(&self) -> u32 {
        self.up_count
    }

    pub fn down_count(&self) -> u32 {
        self.down_count
    }

    /// Mean shoulder height captured at calibration, 0 before.
    pub fn shoulder_baseline(&self) -> f32 {
        self.shoulder_baseline
    }

    /// Shoulder travel in pixels needed to register movement, 0 before calibration.
    pub fn min_movement(&self) -> f32 {
        self.min_movement
    }

    pub fn last_height(&self) -> f32 {
        self.last_height
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn motion(&self) -> Option<Motion> {
        self.motion
    }

    pub fn status_line1(&self) -> String {
        self.prompt.map(|p| p.to_string()).unwrap_or_default()
    }

    pub fn status_line2(&self) -> String {
        self.motion.map(|m| m.to_string()).unwrap_or_default()
    }
}
