use serde::Deserialize;
use squat_base::Vec3;

/// Number of body landmarks produced by the pose model
pub const LANDMARK_COUNT: usize = 33;

/// Body landmark identifiers, numbered as the pose model emits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandmarkType {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    LeftMouth = 9,
    RightMouth = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkType {
    /// All landmark types in index order
    pub const ALL: [LandmarkType; LANDMARK_COUNT] = [
        LandmarkType::Nose,
        LandmarkType::LeftEyeInner,
        LandmarkType::LeftEye,
        LandmarkType::LeftEyeOuter,
        LandmarkType::RightEyeInner,
        LandmarkType::RightEye,
        LandmarkType::RightEyeOuter,
        LandmarkType::LeftEar,
        LandmarkType::RightEar,
        LandmarkType::LeftMouth,
        LandmarkType::RightMouth,
        LandmarkType::LeftShoulder,
        LandmarkType::RightShoulder,
        LandmarkType::LeftElbow,
        LandmarkType::RightElbow,
        LandmarkType::LeftWrist,
        LandmarkType::RightWrist,
        LandmarkType::LeftPinky,
        LandmarkType::RightPinky,
        LandmarkType::LeftIndex,
        LandmarkType::RightIndex,
        LandmarkType::LeftThumb,
        LandmarkType::RightThumb,
        LandmarkType::LeftHip,
        LandmarkType::RightHip,
        LandmarkType::LeftKnee,
        LandmarkType::RightKnee,
        LandmarkType::LeftAnkle,
        LandmarkType::RightAnkle,
        LandmarkType::LeftHeel,
        LandmarkType::RightHeel,
        LandmarkType::LeftFootIndex,
        LandmarkType::RightFootIndex,
    ];
}

impl From<LandmarkType> for usize {
    fn from(kind: LandmarkType) -> usize {
        kind as usize
    }
}

impl TryFrom<usize> for LandmarkType {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkType::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid landmark index: {}. Must be in range 0-{}.",
                value,
                LANDMARK_COUNT - 1
            )
        })
    }
}

/// One detected body joint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub kind: LandmarkType,
    /// x/y in image pixels (y grows downward), z is depth relative to the hips
    pub position: Vec3<f32>,
    /// Probability in [0.0, 1.0] that the joint lies inside the image, if the model reports one
    pub in_frame_likelihood: Option<f32>,
}

impl Landmark {
    pub fn new(kind: LandmarkType, position: Vec3<f32>) -> Self {
        Self {
            kind,
            position,
            in_frame_likelihood: None,
        }
    }

    pub fn with_in_frame_likelihood(mut self, likelihood: f32) -> Self {
        self.in_frame_likelihood = Some(likelihood);
        self
    }
}

/// All landmarks detected in one frame; any joint may be absent
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    slots: [Option<Landmark>; LANDMARK_COUNT],
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            slots: [None; LANDMARK_COUNT],
        }
    }
}

impl FrameSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a landmark, returning the one it replaced
    pub fn insert(&mut self, landmark: Landmark) -> Option<Landmark> {
        self.slots[usize::from(landmark.kind)].replace(landmark)
    }

    pub fn get(&self, kind: LandmarkType) -> Option<&Landmark> {
        self.slots[usize::from(kind)].as_ref()
    }

    /// Present landmarks in index order
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl FromIterator<Landmark> for FrameSnapshot {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        let mut frame = FrameSnapshot::new();
        for landmark in iter {
            frame.insert(landmark);
        }
        frame
    }
}
