use squat_base::{Vec2, Vec3};

#[test]
fn test_vec3_sub_and_xy() {
    let ankle = Vec3::new(10.0f32, 40.0, -2.0);
    let knee = Vec3::new(10.0f32, 30.0, 1.0);
    let d = ankle - knee;
    assert_eq!(d, Vec3::new(0.0, 10.0, -3.0));
    assert_eq!(d.xy(), Vec2::new(0.0, 10.0));
}

#[test]
fn test_vec3_midpoint() {
    let left = Vec3::new(20.0f32, 100.0, 4.0);
    let right = Vec3::new(0.0f32, 110.0, -4.0);
    assert_eq!(left.midpoint(right), Vec3::new(10.0, 105.0, 0.0));
}

#[test]
fn test_vec3_zero_is_default() {
    assert_eq!(Vec3::<f32>::zero(), Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_vec2_heading() {
    let down = Vec2::new(0.0f64, 1.0);
    assert!((down.heading().to_degrees() - 90.0).abs() < 1e-9);

    let left = Vec2::new(-1.0f64, 0.0);
    assert!((left.heading().to_degrees() - 180.0).abs() < 1e-9);
}

#[test]
fn test_vec2_widen_to_f64() {
    let v: Vec2<f64> = Vec2::new(1.5f32, -2.25).into();
    assert_eq!(v, Vec2::new(1.5, -2.25));
}
