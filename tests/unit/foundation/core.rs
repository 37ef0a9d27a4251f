use super::*;

#[test]
fn corners_follow_y_up_convention() {
    let r = Rect::new(0.0, 0.0, 4.0, 2.0);
    assert_eq!(Corner::UpperLeft.of(r), Point::new(0.0, 2.0));
    assert_eq!(Corner::UpperRight.of(r), Point::new(4.0, 2.0));
    assert_eq!(Corner::LowerLeft.of(r), Point::new(0.0, 0.0));
    assert_eq!(Corner::LowerRight.of(r), Point::new(4.0, 0.0));
    assert_eq!(Corner::Top.of(r), Point::new(2.0, 2.0));
    assert_eq!(Corner::Bottom.of(r), Point::new(2.0, 0.0));
}

#[test]
fn rect_from_upper_left_extends_down_and_right() {
    let r = rect_from_upper_left(Point::new(1.0, 3.0), Size::new(2.0, 0.5));
    assert_eq!(r, Rect::new(1.0, 2.5, 3.0, 3.0));
}

#[test]
fn align_rect_moves_requested_corner_onto_target() {
    let r = Rect::new(0.0, 0.0, 4.0, 2.0);
    let moved = align_rect(r, Corner::UpperRight, Point::new(5.0, 2.0));
    assert_eq!(moved, Rect::new(1.0, 0.0, 5.0, 2.0));
}

#[test]
fn default_camera_frame_top_is_four_units() {
    let frame = CameraFrame::default();
    assert_eq!(frame.top(), 4.0);
    assert!((frame.bounds().width() - 128.0 / 9.0).abs() < 1e-12);
}

#[test]
fn camera_frame_rejects_degenerate_sizes() {
    assert!(CameraFrame::new(Point::ZERO, 0.0, 8.0).is_err());
    assert!(CameraFrame::new(Point::ZERO, 8.0, f64::NAN).is_err());
    assert!(CameraFrame::new(Point::ZERO, 8.0, 4.5).is_ok());
}
