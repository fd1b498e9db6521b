// Host-side tests for the dark/light hysteresis controller.

use motion_core::*;
use std::cell::RefCell;
use std::rc::Rc;

fn states(ctrl: &mut BackgroundController, ratios: &[f32]) -> Vec<BackgroundState> {
    ratios
        .iter()
        .map(|&r| {
            ctrl.observe(r, true);
            ctrl.state()
        })
        .collect()
}

use BackgroundState::{Dark, Light};

#[test]
fn entering_then_retreating_does_not_flicker() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    assert_eq!(
        states(&mut ctrl, &[0.1, 0.25, 0.5, 0.25, 0.1]),
        vec![Dark, Light, Light, Light, Dark]
    );
}

#[test]
fn increasing_ratios_follow_the_band() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    assert_eq!(
        states(&mut ctrl, &[0.05, 0.19, 0.2, 0.45, 0.69, 0.7, 0.95]),
        vec![Dark, Dark, Light, Light, Light, Dark, Dark]
    );
}

#[test]
fn decreasing_ratios_only_fall_back_to_dark() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    // fully in view first: dark
    assert_eq!(states(&mut ctrl, &[1.0]), vec![Dark]);
    // shrinking through the band never lights up
    assert_eq!(
        states(&mut ctrl, &[0.8, 0.69, 0.5, 0.21, 0.19, 0.05]),
        vec![Dark, Dark, Dark, Dark, Dark, Dark]
    );
}

#[test]
fn decreasing_above_the_band_turns_dark() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    assert_eq!(states(&mut ctrl, &[0.3]), vec![Light]);
    // grows past the band: dark
    assert_eq!(states(&mut ctrl, &[0.9]), vec![Dark]);
    // shrinks but stays at or above 0.7: still dark
    assert_eq!(states(&mut ctrl, &[0.7]), vec![Dark]);
    // shrinks into the band: held dark
    assert_eq!(states(&mut ctrl, &[0.6]), vec![Dark]);
    // grows inside the band: light again
    assert_eq!(states(&mut ctrl, &[0.65]), vec![Light]);
}

#[test]
fn scrolling_back_and_forth_near_lower_edge_is_stable() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    assert_eq!(
        states(&mut ctrl, &[0.22, 0.21, 0.23, 0.21, 0.22]),
        vec![Light, Light, Light, Light, Light]
    );
}

#[test]
fn leaving_the_viewport_forces_dark_and_resets_ratio() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    ctrl.observe(0.4, true);
    assert_eq!(ctrl.state(), Light);
    assert_eq!(ctrl.observe(0.0, false), Some(Dark));
    assert_eq!(ctrl.prev_ratio(), 0.0);
    // re-entering from zero counts as increasing
    assert_eq!(ctrl.observe(0.3, true), Some(Light));
}

#[test]
fn initial_non_intersecting_report_is_ignored() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    assert_eq!(ctrl.observe(0.0, false), None);
    assert_eq!(ctrl.state(), Dark);
}

#[test]
fn listener_fires_once_per_real_change() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    let sink = calls.clone();
    ctrl.set_listener(move |dark| sink.borrow_mut().push(dark));

    for r in [0.1, 0.25, 0.3, 0.5, 0.4, 0.3, 0.1, 0.05] {
        ctrl.observe(r, true);
    }
    ctrl.observe(0.0, false);
    // light on the way in, dark once below 0.2 on the way out; leaving is no change
    assert_eq!(*calls.borrow(), vec![false, true]);
}

#[test]
fn pure_step_function_matches_controller() {
    let band = HysteresisBand::default();
    assert_eq!(next_state(&band, Dark, 0.1, 0.25), Light);
    assert_eq!(next_state(&band, Light, 0.5, 0.25), Light);
    assert_eq!(next_state(&band, Light, 0.25, 0.1), Dark);
    assert_eq!(next_state(&band, Dark, 0.8, 0.5), Dark);
    assert_eq!(next_state(&band, Light, 0.4, 0.4), Light);
}

#[test]
fn custom_band_is_respected() {
    let band = HysteresisBand {
        light_from: 0.4,
        light_until: 0.9,
    };
    let mut ctrl = BackgroundController::new(band);
    assert_eq!(states(&mut ctrl, &[0.3, 0.5, 0.95]), vec![Dark, Light, Dark]);
}

#[test]
fn reset_returns_to_mount_state() {
    let mut ctrl = BackgroundController::new(HysteresisBand::default());
    ctrl.observe(0.3, true);
    ctrl.reset();
    assert_eq!(ctrl.state(), Dark);
    assert_eq!(ctrl.prev_ratio(), 0.0);
    assert_eq!(ctrl.observe(0.0, false), None);
}

#[test]
fn threshold_ladder_has_one_percent_steps() {
    let ladder = default_threshold_ladder();
    assert_eq!(ladder.len(), 101);
    assert_eq!(ladder[0], 0.0);
    assert_eq!(ladder[100], 1.0);
    assert!((ladder[37] - 0.37).abs() < 1e-12);
    for pair in ladder.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert_eq!(threshold_ladder(0), vec![0.0, 1.0]);
}
