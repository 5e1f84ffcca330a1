//! Skeleton and rep-counter overlay drawing.
//!
//! `SkeletonOverlay` turns a landmark frame and a counter evaluation into
//! point, line and text calls on any `Renderer`. `RgbCanvas` is a software
//! renderer over an RGB8 frame buffer.

pub mod canvas;
pub mod config;
pub mod depth;
pub mod renderer;
pub mod skeleton;

pub use canvas::{CanvasError, RgbCanvas};
pub use config::OverlayConfig;
pub use depth::{DepthRange, depth_color};
pub use renderer::{GREEN, Renderer, Rgb, WHITE, YELLOW};
pub use skeleton::{LEFT_BODY, RIGHT_BODY, SkeletonOverlay};
