// Host-side tests for the camera path and the character reveal.

use glam::Vec3;
use motion_core::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn camera_rests_until_half_entered() {
    let path = CameraPath::default();
    for entered in [-3.0, 0.0, 0.25, 0.49] {
        assert_eq!(path.progress(entered), None);
        assert_eq!(path.pose(entered), CameraPose::REST);
    }
    assert_eq!(path.pose(f32::NAN), CameraPose::REST);
}

#[test]
fn camera_path_hits_its_waypoints() {
    let path = CameraPath::default();

    let start = path.pose(0.5);
    assert_eq!(start.position, CAMERA_START);
    assert_eq!(start.particle_rotation, 0.0);

    // split at 60% of the path: 0.5 + 0.6 * 0.5
    let mid = path.pose(0.8);
    assert!(close(mid.position, CAMERA_MID), "mid was {:?}", mid.position);
    assert!((mid.particle_rotation - PARTICLE_ROTATION_TOTAL).abs() < 1e-3);

    let end = path.pose(1.0);
    assert_eq!(end.position, CAMERA_END);
    assert_eq!(end.particle_rotation, PARTICLE_ROTATION_TOTAL);

    // scrolled well past the section: stays at the end
    assert_eq!(path.pose(4.0), end);
}

#[test]
fn first_phase_dollies_back_while_spinning() {
    let path = CameraPath::default();
    // progress 0.3 is halfway through the first phase
    let pose = path.pose(0.65);
    assert!(close(pose.position, Vec3::new(0.0, 0.0, 13.0)));
    assert!((pose.particle_rotation - PARTICLE_ROTATION_TOTAL * 0.5).abs() < 1e-4);
}

#[test]
fn second_phase_cranes_up_with_spin_held() {
    let path = CameraPath::default();
    // progress 0.8 is halfway through the second phase
    let pose = path.pose(0.9);
    assert!(close(pose.position, Vec3::new(0.0, 5.0, 15.0)));
    assert_eq!(pose.particle_rotation, PARTICLE_ROTATION_TOTAL);
}

#[test]
fn camera_z_moves_monotonically_in_first_phase() {
    let path = CameraPath::default();
    let mut prev = path.pose(0.5).position.z;
    for i in 1..=29 {
        let z = path.pose(0.5 + i as f32 * 0.01).position.z;
        assert!(z >= prev);
        prev = z;
    }
}

#[test]
fn poses_are_always_finite() {
    let path = CameraPath::default();
    for i in -50..150 {
        assert!(path.pose(i as f32 / 50.0).is_finite());
    }
}

#[test]
fn degenerate_path_does_not_divide_by_zero() {
    let path = CameraPath {
        enter_ratio: 1.0,
        split: 1.0,
        ..CameraPath::default()
    };
    assert_eq!(path.progress(1.0), Some(1.0));
    assert!(path.pose(1.0).is_finite());
}

#[test]
fn reveal_lead_measures_from_viewport_bottom() {
    let wh = 800.0;
    assert_eq!(reveal_lead_percent(&ViewportRect::vertical(800.0, 100.0), wh), 0.0);
    assert_eq!(reveal_lead_percent(&ViewportRect::vertical(700.0, 100.0), wh), 100.0);
    assert_eq!(reveal_lead_percent(&ViewportRect::vertical(600.0, 100.0), wh), 200.0);
    assert_eq!(reveal_lead_percent(&ViewportRect::vertical(0.0, 0.0), wh), 0.0);
}

#[test]
fn char_windows_tile_the_spread() {
    let (start, end) = char_window(0, 10, 200.0);
    assert_eq!(start, 0.0);
    assert!((end - 18.0).abs() < 1e-4);
    let (start, end) = char_window(9, 10, 200.0);
    assert!((start - 180.0).abs() < 1e-4);
    assert!((end - 198.0).abs() < 1e-4);
    // no characters still yields a usable window
    let (_, end) = char_window(0, 0, 200.0);
    assert!((end - 180.0).abs() < 1e-3);
}

#[test]
fn characters_fade_in_order() {
    let count = 10;
    assert_eq!(char_opacity(0.0, 0, count, 200.0), 0.0);
    assert!((char_opacity(9.0, 0, count, 200.0) - 0.5).abs() < 1e-5);
    assert_eq!(char_opacity(18.0, 0, count, 200.0), 1.0);
    // the second character has not started yet
    assert_eq!(char_opacity(18.0, 1, count, 200.0), 0.0);
    // fully revealed heading
    for i in 0..count {
        assert_eq!(char_opacity(200.0, i, count, 200.0), 1.0);
    }
}

#[test]
fn zero_spread_switches_instantly() {
    assert_eq!(char_opacity(-1.0, 3, 5, 0.0), 0.0);
    assert_eq!(char_opacity(0.0, 3, 5, 0.0), 1.0);
}
