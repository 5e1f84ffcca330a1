use crate::Rgb;

/// Depth values mapped to full red (`near`) and full blue (`far`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    pub near: f32,
    pub far: f32,
}

impl DepthRange {
    /// Symmetric range of +/- `extent`, used when depth is not rescaled.
    pub fn symmetric(extent: f32) -> Self {
        Self {
            near: -extent,
            far: extent,
        }
    }

    /// Range spanning the observed z values, never collapsing to zero on either side.
    pub fn from_observed(z_min: f32, z_max: f32) -> Self {
        Self {
            near: z_min.min(-0.001),
            far: z_max.max(0.001),
        }
    }
}

/// Shade for a landmark at depth `z`: whiter near 0, red towards the camera, blue away from it.
pub fn depth_color(z: f32, range: DepthRange) -> Rgb {
    if z < 0.0 {
        let v = intensity(z / range.near);
        [255, 255 - v, 255 - v]
    } else {
        let v = intensity(z / range.far);
        [255 - v, 255 - v, 255]
    }
}

fn intensity(fraction: f32) -> u8 {
    // float-to-int `as` saturates, NaN becomes 0
    ((fraction * 255.0) as i32).clamp(0, 255) as u8
}
