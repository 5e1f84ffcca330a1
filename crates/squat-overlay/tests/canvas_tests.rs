use squat_base::{Vec2, Vec3};
use squat_overlay::{CanvasError, Renderer, RgbCanvas};

#[test]
fn test_stroke_line_horizontal() {
    let mut canvas = RgbCanvas::new(10, 5);
    let white = [255, 255, 255];

    canvas.stroke_line((1, 2), (8, 2), white);

    for x in 1..=8 {
        assert_eq!(canvas.pixel(x, 2), Some(white), "Pixel at ({}, 2) should be white", x);
    }
    assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0]));
    assert_eq!(canvas.pixel(9, 2), Some([0, 0, 0]));
}

#[test]
fn test_stroke_line_vertical() {
    let mut canvas = RgbCanvas::new(5, 10);
    let red = [255, 0, 0];

    canvas.stroke_line((2, 1), (2, 8), red);

    for y in 1..=8 {
        assert_eq!(canvas.pixel(2, y), Some(red), "Pixel at (2, {}) should be red", y);
    }
}

#[test]
fn test_stroke_line_clips_to_bounds() {
    let mut canvas = RgbCanvas::new(10, 10);
    let white = [255, 255, 255];

    canvas.stroke_line((-5, 5), (15, 5), white);

    for x in 0..10 {
        assert_eq!(canvas.pixel(x, 5), Some(white), "Pixel at ({}, 5) should be white", x);
    }
}

#[test]
fn test_stroke_line_fully_outside_draws_nothing() {
    let mut canvas = RgbCanvas::new(10, 10);
    canvas.stroke_line((-20, -3), (-2, -8), [255, 255, 255]);
    assert!(canvas.as_rgb().iter().all(|&b| b == 0));
}

#[test]
fn test_fill_circle_basic() {
    let mut canvas = RgbCanvas::new(20, 20);
    let green = [0, 255, 0];

    canvas.fill_circle(10, 10, 3, green);

    assert_eq!(canvas.pixel(10, 10), Some(green));
    assert_eq!(canvas.pixel(12, 10), Some(green));
    assert_eq!(canvas.pixel(15, 10), Some([0, 0, 0]));
}

#[test]
fn test_fill_circle_clips() {
    let mut canvas = RgbCanvas::new(10, 10);
    let blue = [0, 0, 255];

    canvas.fill_circle(1, 1, 5, blue);

    assert_eq!(canvas.pixel(1, 1), Some(blue));
    assert_eq!(canvas.pixel(0, 0), Some(blue));
}

#[test]
fn test_draw_point_uses_dot_radius() {
    let mut canvas = RgbCanvas::new(30, 30).with_dot_radius(2);
    canvas.draw_point(Vec3::new(15.0, 15.0, -3.0), [9, 9, 9]);

    assert_eq!(canvas.pixel(17, 15), Some([9, 9, 9]));
    assert_eq!(canvas.pixel(18, 15), Some([0, 0, 0]));
}

#[test]
fn test_draw_text_keeps_captions_per_line() {
    let mut canvas = RgbCanvas::new(4, 4);
    canvas.draw_text("ready", 1);
    canvas.draw_text("count:2", 3);
    canvas.draw_text("count:3", 3);

    assert_eq!(canvas.caption(1), Some("ready"));
    assert_eq!(canvas.caption(2), None);
    assert_eq!(canvas.caption(3), Some("count:3"));
    assert_eq!(canvas.captions().collect::<Vec<_>>(), vec![(1, "ready"), (3, "count:3")]);
}

#[test]
fn test_draw_label_is_recorded() {
    let mut canvas = RgbCanvas::new(4, 4);
    canvas.draw_label("0.97", Vec2::new(1.0, 2.0));
    assert_eq!(canvas.labels(), &[(Vec2::new(1.0, 2.0), "0.97".to_string())]);
}

#[test]
fn test_to_argb() {
    let rgb = vec![
        255, 0, 0, // Red
        0, 255, 0, // Green
        0, 0, 255, // Blue
        128, 128, 128, // Gray
    ];
    let canvas = RgbCanvas::from_rgb(rgb, 2, 2).unwrap();

    let argb = canvas.to_argb();

    assert_eq!(argb, vec![0x00FF0000, 0x0000FF00, 0x000000FF, 0x00808080]);
}

#[test]
fn test_from_rgb_size_mismatch() {
    let result = RgbCanvas::from_rgb(vec![0; 10], 2, 2);
    assert_eq!(
        result.unwrap_err(),
        CanvasError::SizeMismatch {
            expected: 12,
            got: 10
        }
    );
}

#[test]
fn test_pixel_out_of_bounds() {
    let canvas = RgbCanvas::new(3, 3);
    assert_eq!(canvas.pixel(3, 0), None);
    assert_eq!(canvas.pixel(0, 3), None);
}

#[test]
fn test_draw_point_far_outside_is_ignored() {
    let mut canvas = RgbCanvas::new(64, 48);

    canvas.draw_point(Vec3::new(1.0e10, 10.0, 0.0), [255, 255, 255]);
    canvas.draw_point(Vec3::new(-1.0e10, -1.0e10, 0.0), [255, 255, 255]);
    canvas.fill_circle(i32::MAX, i32::MIN, 8, [255, 255, 255]);

    assert!(canvas.as_rgb().iter().all(|&b| b == 0));
}

#[test]
fn test_fill_circle_clipped_at_edge() {
    let mut canvas = RgbCanvas::new(10, 10);
    let green = [0, 255, 0];

    canvas.fill_circle(-1, 5, 2, green);

    assert_eq!(canvas.pixel(0, 5), Some(green));
    assert_eq!(canvas.pixel(1, 5), Some(green));
    assert_eq!(canvas.pixel(2, 5), Some([0, 0, 0]));
    assert_eq!(canvas.pixel(0, 3), Some([0, 0, 0]));
}
