//! Dark/light background switch driven by intersection ratios.
//!
//! While the ratio grows, the band `[light_from, light_until)` is light and
//! everything else dark. While it shrinks, the state only ever falls back to
//! dark (outside the band) and is held inside it, so scrolling back and forth
//! near an edge cannot make the background flicker.

use crate::config::HysteresisBand;
use crate::constants::THRESHOLD_LADDER_STEPS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundState {
    #[default]
    Dark,
    Light,
}

impl BackgroundState {
    #[inline]
    pub fn is_dark(self) -> bool {
        self == BackgroundState::Dark
    }
}

/// Intersection thresholds `0, 1/steps, .., 1` so the observer reports every
/// step of visible ratio.
pub fn threshold_ladder(steps: usize) -> Vec<f64> {
    let steps = steps.max(1);
    (0..=steps).map(|i| i as f64 / steps as f64).collect()
}

pub fn default_threshold_ladder() -> Vec<f64> {
    threshold_ladder(THRESHOLD_LADDER_STEPS)
}

/// Pure hysteresis step: next state given the previous ratio, the current one
/// and the current state.
pub fn next_state(
    band: &HysteresisBand,
    state: BackgroundState,
    prev_ratio: f32,
    ratio: f32,
) -> BackgroundState {
    if ratio > prev_ratio {
        if band.contains(ratio) {
            BackgroundState::Light
        } else {
            BackgroundState::Dark
        }
    } else if ratio < prev_ratio {
        if band.contains(ratio) {
            state
        } else {
            BackgroundState::Dark
        }
    } else {
        state
    }
}

type DarkListener = Box<dyn FnMut(bool)>;

pub struct BackgroundController {
    band: HysteresisBand,
    state: BackgroundState,
    prev_ratio: f32,
    seen_intersecting: bool,
    listener: Option<DarkListener>,
}

impl BackgroundController {
    pub fn new(band: HysteresisBand) -> Self {
        Self {
            band,
            state: BackgroundState::Dark,
            prev_ratio: 0.0,
            seen_intersecting: false,
            listener: None,
        }
    }

    /// Called with `true` for dark, `false` for light, once per real change.
    pub fn set_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn state(&self) -> BackgroundState {
        self.state
    }

    pub fn prev_ratio(&self) -> f32 {
        self.prev_ratio
    }

    /// Feed one intersection report. Returns the new state when it changed.
    pub fn observe(&mut self, ratio: f32, is_intersecting: bool) -> Option<BackgroundState> {
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let next = if !is_intersecting {
            if !self.seen_intersecting {
                return None;
            }
            // left the viewport entirely: always dark, start over from zero
            self.seen_intersecting = false;
            self.prev_ratio = 0.0;
            BackgroundState::Dark
        } else {
            self.seen_intersecting = true;
            let next = next_state(&self.band, self.state, self.prev_ratio, ratio);
            self.prev_ratio = ratio;
            next
        };
        if next == self.state {
            return None;
        }
        log::debug!("[background] {:?} -> {:?} at ratio {:.2}", self.state, next, ratio);
        self.state = next;
        if let Some(listener) = self.listener.as_mut() {
            listener(next.is_dark());
        }
        Some(next)
    }

    /// Back to the mount-time state. The listener is kept.
    pub fn reset(&mut self) {
        self.state = BackgroundState::Dark;
        self.prev_ratio = 0.0;
        self.seen_intersecting = false;
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }
}
