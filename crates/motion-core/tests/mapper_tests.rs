// Host-side tests for the animated-value mapper.

use motion_core::*;

#[test]
fn centred_element_gets_max_values() {
    let cfg = MotionConfig::default();
    assert_eq!(map_scale(0.0, 800.0, cfg.min_scale, cfg.max_scale), cfg.max_scale);
    assert_eq!(
        map_opacity(0.0, 800.0, cfg.min_opacity, cfg.max_opacity),
        cfg.max_opacity
    );
}

#[test]
fn peripheral_element_gets_min_values() {
    let cfg = MotionConfig::default();
    assert_eq!(map_scale(800.0, 800.0, cfg.min_scale, cfg.max_scale), cfg.min_scale);
    // beyond max distance is still the periphery
    assert_eq!(map_scale(5000.0, 800.0, cfg.min_scale, cfg.max_scale), cfg.min_scale);
    assert_eq!(
        map_opacity(800.0, 800.0, cfg.min_opacity, cfg.max_opacity),
        cfg.min_opacity
    );
}

#[test]
fn mapped_values_stay_inside_configured_bounds() {
    let ranges = [(0.8_f32, 1.45_f32), (0.3, 1.0), (1.0, 1.0), (0.0, 2.5), (0.1, 0.15)];
    for (min, max) in ranges {
        for max_d in [1.0_f32, 37.5, 800.0, 1920.0] {
            for i in 0..=400 {
                let d = max_d * 1.5 * i as f32 / 400.0;
                let s = map_scale(d, max_d, min, max);
                assert!(
                    s >= min && s <= max,
                    "scale {s} outside {min}..{max} at d={d} max_d={max_d}"
                );
                let o = map_opacity(d, max_d, min, max);
                assert!(o >= min && o <= max);
            }
        }
    }
}

#[test]
fn mapping_decreases_with_distance() {
    let mut prev = map_scale(0.0, 1000.0, 0.8, 1.45);
    for i in 1..=100 {
        let s = map_scale(i as f32 * 10.0, 1000.0, 0.8, 1.45);
        assert!(s <= prev, "scale grew at distance {}", i * 10);
        prev = s;
    }
}

#[test]
fn halfway_distance_is_halfway_value() {
    // smoothstep(0.5) == 0.5 so the midpoint maps to the midpoint
    let s = map_scale(400.0, 800.0, 1.0, 2.0);
    assert!((s - 1.5).abs() < 1e-6);
}

#[test]
fn non_positive_max_distance_counts_as_periphery() {
    assert_eq!(map_scale(0.0, 0.0, 0.8, 1.45), 0.8);
    assert_eq!(map_opacity(10.0, -1.0, 0.3, 1.0), 0.3);
    assert_eq!(focus_progress(0.0, f32::NAN), 0.0);
}

#[test]
fn map_visual_end_to_end() {
    let cfg = MotionConfig::default();
    // element exactly fills the viewport
    let centred = map_visual(&ViewportRect::vertical(0.0, 800.0), 800.0, &cfg);
    assert_eq!(centred.scale, cfg.max_scale);
    assert_eq!(centred.opacity, cfg.max_opacity);

    // element entirely below the viewport
    let below = ViewportRect::vertical(800.0, 800.0);
    assert_eq!(visibility_ratio(&below, 800.0), 0.0);
    let v = map_visual(&below, 800.0, &cfg);
    assert_eq!(v.scale, cfg.min_scale);
    assert_eq!(v.opacity, cfg.min_opacity);
    assert_eq!(VisualParams::resting(&cfg), v);
}
