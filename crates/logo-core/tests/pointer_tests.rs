// Host-side tests for the cursor-to-pose mapping.

use glam::Vec2;
use logo_core::*;

fn square_400() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 400.0, 400.0)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn bottom_right_corner_maps_to_max_tilt_and_clamped_glow() {
    let pose = pose_for_cursor(Vec2::new(400.0, 400.0), &square_400()).unwrap();
    assert!(approx(pose.rotation.y, 9.0));
    assert!(approx(pose.rotation.x, -9.0));
    assert_eq!(pose.glow, Vec2::new(80.0, 70.0));
}

#[test]
fn center_maps_to_flat_pose() {
    let pose = pose_for_cursor(Vec2::new(200.0, 200.0), &square_400()).unwrap();
    assert!(approx(pose.rotation.x, 0.0));
    assert!(approx(pose.rotation.y, 0.0));
    assert_eq!(pose.glow, Vec2::new(50.0, 50.0));
}

#[test]
fn moving_up_tilts_top_toward_viewer() {
    let pose = pose_for_cursor(Vec2::new(200.0, 0.0), &square_400()).unwrap();
    assert!(pose.rotation.x > 0.0);
    assert!(approx(pose.rotation.y, 0.0));
}

#[test]
fn offset_is_relative_to_box_origin() {
    // Same relative position as the centered case, box shifted in the viewport.
    let bounds = BoundingBox::new(120.0, 80.0, 300.0, 200.0);
    let pose = pose_for_cursor(Vec2::new(270.0, 180.0), &bounds).unwrap();
    assert!(approx(pose.rotation.x, 0.0));
    assert!(approx(pose.rotation.y, 0.0));
    assert_eq!(pose.glow, Vec2::new(50.0, 50.0));
}

#[test]
fn rotation_stays_within_tilt_range_inside_box() {
    let bounds = BoundingBox::new(10.0, 30.0, 250.0, 180.0);
    for i in 1..50 {
        for j in 1..50 {
            let cursor = Vec2::new(
                bounds.left + bounds.width * i as f32 / 50.0,
                bounds.top + bounds.height * j as f32 / 50.0,
            );
            let pose = pose_for_cursor(cursor, &bounds).unwrap();
            assert!(pose.rotation.x.abs() <= TILT_FACTOR_DEG, "{:?}", pose);
            assert!(pose.rotation.y.abs() <= TILT_FACTOR_DEG, "{:?}", pose);
        }
    }
}

#[test]
fn glow_is_clamped_for_any_cursor() {
    let bounds = square_400();
    for i in -20..=20 {
        for j in -20..=20 {
            let cursor = Vec2::new(i as f32 * 60.0, j as f32 * 60.0);
            let pose = pose_for_cursor(cursor, &bounds).unwrap();
            assert!(pose.glow.x >= GLOW_X_RANGE.0 && pose.glow.x <= GLOW_X_RANGE.1);
            assert!(pose.glow.y >= GLOW_Y_RANGE.0 && pose.glow.y <= GLOW_Y_RANGE.1);
        }
    }
}

#[test]
fn top_left_outside_clamps_to_lower_bounds() {
    let pose = pose_for_cursor(Vec2::new(-500.0, -500.0), &square_400()).unwrap();
    assert_eq!(pose.glow, Vec2::new(20.0, 15.0));
}

#[test]
fn degenerate_boxes_yield_no_pose() {
    let cursor = Vec2::new(10.0, 10.0);
    assert!(pose_for_cursor(cursor, &BoundingBox::new(0.0, 0.0, 0.0, 100.0)).is_none());
    assert!(pose_for_cursor(cursor, &BoundingBox::new(0.0, 0.0, 100.0, 0.0)).is_none());
    assert!(pose_for_cursor(cursor, &BoundingBox::new(0.0, 0.0, -5.0, 100.0)).is_none());
    assert!(pose_for_cursor(cursor, &BoundingBox::new(0.0, 0.0, f32::NAN, 100.0)).is_none());
}

#[test]
fn rest_pose_is_default() {
    assert_eq!(Pose::default(), Pose::REST);
    assert_eq!(Pose::REST.rotation, Vec2::ZERO);
    assert_eq!(Pose::REST.glow, Vec2::new(50.0, 35.0));
}
