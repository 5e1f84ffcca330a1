use squat_base::{Vec2, Vec3};

pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];
pub const GREEN: Rgb = [0, 255, 0];
pub const YELLOW: Rgb = [255, 255, 0];

/// Drawing surface for the overlay.
///
/// Positions are in the pose model's image space; mapping them to screen
/// space is up to the implementation.
pub trait Renderer {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn draw_point(&mut self, position: Vec3<f32>, color: Rgb);

    fn draw_line(&mut self, start: Vec3<f32>, end: Vec3<f32>, color: Rgb);

    /// Status text on the numbered HUD line (1-based).
    fn draw_text(&mut self, text: &str, line: usize);

    /// Small text anchored at an image position.
    fn draw_label(&mut self, text: &str, position: Vec2<f32>);
}
