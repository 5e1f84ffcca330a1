use squat_base::{Vec2, Vec3};

/// Interior angle at `mid` between the segments towards `first` and `last`, in degrees.
///
/// Only x and y are used. The result is folded into `[0, 180]`, so a fully
/// extended joint reads 180.
pub fn joint_angle(first: Vec3<f32>, mid: Vec3<f32>, last: Vec3<f32>) -> f64 {
    let to_last: Vec2<f64> = (last - mid).xy().into();
    let to_first: Vec2<f64> = (first - mid).xy().into();

    let angle = (to_last.heading() - to_first.heading()).to_degrees().abs();
    if angle > 180.0 { 360.0 - angle } else { angle }
}
