//! Squat repetition counting over per-frame body landmarks.
//!
//! A `RepCounter` evaluates one `FrameSnapshot` at a time against a
//! caller-owned `SessionState`, producing guidance text and the running rep
//! count. Pose inference and drawing live elsewhere.

pub mod angle;
pub mod config;
pub mod counter;
pub mod error;
pub mod landmark;
pub mod state;

pub use angle::joint_angle;
pub use config::CounterConfig;
pub use counter::{Evaluation, Outcome, REQUIRED_LANDMARKS, RepCounter, SkipReason};
pub use error::CounterError;
pub use landmark::{FrameSnapshot, LANDMARK_COUNT, Landmark, LandmarkType};
pub use state::{Motion, Phase, Prompt, SessionState};
