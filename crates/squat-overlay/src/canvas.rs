use std::fmt;

use squat_base::{Vec2, Vec3};

use crate::{Renderer, Rgb};

const DEFAULT_DOT_RADIUS: i32 = 8;

#[derive(Debug, PartialEq)]
pub enum CanvasError {
    SizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::SizeMismatch { expected, got } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

/// Software renderer over an HWC RGB8 frame.
///
/// Points and lines are rasterised and clipped to the frame. Text is not
/// rasterised: HUD lines and labels are kept so the caller can show them
/// however it displays the frame.
#[derive(Debug, Clone)]
pub struct RgbCanvas {
    buf: Vec<u8>,
    width: usize,
    height: usize,
    dot_radius: i32,
    captions: Vec<String>,
    labels: Vec<(Vec2<f32>, String)>,
}

impl RgbCanvas {
    /// Black canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buf: vec![0; width * height * 3],
            width,
            height,
            dot_radius: DEFAULT_DOT_RADIUS,
            captions: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Draw over an existing camera frame
    pub fn from_rgb(buf: Vec<u8>, width: usize, height: usize) -> Result<Self, CanvasError> {
        let expected = width * height * 3;
        if buf.len() != expected {
            return Err(CanvasError::SizeMismatch {
                expected,
                got: buf.len(),
            });
        }
        Ok(Self {
            buf,
            width,
            height,
            dot_radius: DEFAULT_DOT_RADIUS,
            captions: Vec::new(),
            labels: Vec::new(),
        })
    }

    pub fn with_dot_radius(mut self, radius: i32) -> Self {
        self.dot_radius = radius;
        self
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        Some([self.buf[idx], self.buf[idx + 1], self.buf[idx + 2]])
    }

    pub fn as_rgb(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_rgb(self) -> Vec<u8> {
        self.buf
    }

    /// Text drawn on HUD `line`, if any
    pub fn caption(&self, line: usize) -> Option<&str> {
        self.captions
            .get(line)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Non-empty HUD lines in line order
    pub fn captions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.captions
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.is_empty())
            .map(|(line, text)| (line, text.as_str()))
    }

    pub fn labels(&self) -> &[(Vec2<f32>, String)] {
        &self.labels
    }

    /// Pack pixels as 0x00RRGGBB, the layout window buffers expect
    pub fn to_argb(&self) -> Vec<u32> {
        self.buf
            .chunks_exact(3)
            .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
            .collect()
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        let idx = (y * self.width + x) * 3;
        self.buf[idx..idx + 3].copy_from_slice(&color);
    }

    /// Filled disc, clipped to the canvas
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        // i64 so centres saturated at the i32 limits cannot overflow
        let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
        let x_range = (cx - r).max(0)..=(cx + r).min(self.width as i64 - 1);
        let y_range = (cy - r).max(0)..=(cy + r).min(self.height as i64 - 1);

        for y in y_range {
            for x in x_range.clone() {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(x as usize, y as usize, color);
                }
            }
        }
    }

    /// Bresenham line, Cohen-Sutherland clipped to the canvas
    pub fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        let (w, h) = (self.width as i32, self.height as i32);
        let Some(((mut x0, mut y0), (x1, y1))) = clip_line(from, to, w, h) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.set_pixel(x0 as usize, y0 as usize, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl Renderer for RgbCanvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn draw_point(&mut self, position: Vec3<f32>, color: Rgb) {
        let radius = self.dot_radius;
        self.fill_circle(position.x as i32, position.y as i32, radius, color);
    }

    fn draw_line(&mut self, start: Vec3<f32>, end: Vec3<f32>, color: Rgb) {
        self.stroke_line(
            (start.x as i32, start.y as i32),
            (end.x as i32, end.y as i32),
            color,
        );
    }

    fn draw_text(&mut self, text: &str, line: usize) {
        if self.captions.len() <= line {
            self.captions.resize(line + 1, String::new());
        }
        self.captions[line] = text.to_string();
    }

    fn draw_label(&mut self, text: &str, position: Vec2<f32>) {
        self.labels.push((position, text.to_string()));
    }
}

// Cohen-Sutherland outcodes
const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

/// Clip a segment to `[0, width) x [0, height)`, or `None` if nothing is visible.
fn clip_line(
    (mut x0, mut y0): (i32, i32),
    (mut x1, mut y1): (i32, i32),
    width: i32,
    height: i32,
) -> Option<((i32, i32), (i32, i32))> {
    if width <= 0 || height <= 0 {
        return None;
    }
    loop {
        let code0 = outcode(x0, y0, width, height);
        let code1 = outcode(x1, y1, width, height);

        if code0 | code1 == 0 {
            return Some(((x0, y0), (x1, y1)));
        }
        if code0 & code1 != 0 {
            return None;
        }

        let code = if code0 != 0 { code0 } else { code1 };
        // i64 so segments far off-screen cannot overflow
        let (x0l, y0l) = (x0 as i64, y0 as i64);
        let (dx, dy) = (x1 as i64 - x0l, y1 as i64 - y0l);
        let (top, bottom, left, right) = (0i64, height as i64 - 1, 0i64, width as i64 - 1);
        let (x, y) = if code & TOP != 0 {
            (x0l + dx * (top - y0l) / dy, top)
        } else if code & BOTTOM != 0 {
            (x0l + dx * (bottom - y0l) / dy, bottom)
        } else if code & LEFT != 0 {
            (left, y0l + dy * (left - x0l) / dx)
        } else {
            (right, y0l + dy * (right - x0l) / dx)
        };
        let (x, y) = (x as i32, y as i32);

        if code == code0 {
            x0 = x;
            y0 = y;
        } else {
            x1 = x;
            y1 = y;
        }
    }
}
