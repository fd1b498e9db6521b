//! Tunable parameters. Every field has its own default so callers can
//! override one value and keep the rest.

use crate::constants::*;
use crate::error::{MotionError, Result};

/// Ranges and pacing for the center-focus mapping and the progress controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    pub center_threshold: f32,
    pub update_interval_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            min_opacity: DEFAULT_MIN_OPACITY,
            max_opacity: DEFAULT_MAX_OPACITY,
            center_threshold: DEFAULT_CENTER_THRESHOLD,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<()> {
        check_range("scale", self.min_scale, self.max_scale)?;
        check_range("opacity", self.min_opacity, self.max_opacity)?;
        if !(0.0..=1.0).contains(&self.min_opacity) || !(0.0..=1.0).contains(&self.max_opacity) {
            return Err(MotionError::InvalidConfig(format!(
                "opacity range {}..{} leaves [0, 1]",
                self.min_opacity, self.max_opacity
            )));
        }
        check_unit("center_threshold", self.center_threshold)?;
        if !self.update_interval_ms.is_finite() || self.update_interval_ms < 0.0 {
            return Err(MotionError::InvalidConfig(format!(
                "update_interval_ms must be a non-negative number, got {}",
                self.update_interval_ms
            )));
        }
        Ok(())
    }
}

/// Intersection-ratio band in which the client section turns light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HysteresisBand {
    pub light_from: f32,
    pub light_until: f32,
}

impl Default for HysteresisBand {
    fn default() -> Self {
        Self {
            light_from: DEFAULT_LIGHT_FROM,
            light_until: DEFAULT_LIGHT_UNTIL,
        }
    }
}

impl HysteresisBand {
    #[inline]
    pub fn contains(&self, ratio: f32) -> bool {
        ratio >= self.light_from && ratio < self.light_until
    }

    pub fn validate(&self) -> Result<()> {
        check_unit("light_from", self.light_from)?;
        check_unit("light_until", self.light_until)?;
        if self.light_from >= self.light_until {
            return Err(MotionError::InvalidConfig(format!(
                "light band {}..{} is empty",
                self.light_from, self.light_until
            )));
        }
        Ok(())
    }
}

/// Portion of a pinned section's height over which the scrub runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubWindow {
    pub start: f32,
    pub end: f32,
}

impl Default for ScrubWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_SCRUB_START,
            end: DEFAULT_SCRUB_END,
        }
    }
}

fn check_range(name: &str, min: f32, max: f32) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(MotionError::InvalidConfig(format!(
            "{name} range {min}..{max} is not ordered"
        )));
    }
    Ok(())
}

fn check_unit(name: &str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(MotionError::InvalidConfig(format!(
            "{name} must lie in [0, 1], got {value}"
        )));
    }
    Ok(())
}
