//! Scroll math composed into visual parameters.

use crate::config::MotionConfig;
use crate::geometry::ViewportRect;
use crate::scroll::{center_distance, clamp, clamped_progress, lerp, max_distance, smoothstep};

/// Scale and opacity for one frame of a center-focused element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub scale: f32,
    pub opacity: f32,
}

impl VisualParams {
    /// Values shown while the element is off screen or the pipeline failed.
    pub fn resting(config: &MotionConfig) -> Self {
        Self {
            scale: config.min_scale,
            opacity: config.min_opacity,
        }
    }
}

/// 1 when the element is centred, easing down to 0 at `max_distance`.
///
/// A non-positive `max_distance` counts as "at the periphery".
pub fn focus_progress(distance: f32, max_distance: f32) -> f32 {
    if max_distance.is_nan() || max_distance <= 0.0 {
        return 0.0;
    }
    let norm = clamped_progress(distance / max_distance);
    1.0 - smoothstep(norm)
}

pub fn map_scale(distance: f32, max_distance: f32, min_scale: f32, max_scale: f32) -> f32 {
    map_range(distance, max_distance, min_scale, max_scale)
}

pub fn map_opacity(distance: f32, max_distance: f32, min_opacity: f32, max_opacity: f32) -> f32 {
    map_range(distance, max_distance, min_opacity, max_opacity)
}

fn map_range(distance: f32, max_distance: f32, min: f32, max: f32) -> f32 {
    let value = lerp(min, max, focus_progress(distance, max_distance));
    // rounding must not push the value past its configured bounds
    clamp(value, min.min(max), max.max(min))
}

pub fn map_visual(rect: &ViewportRect, window_height: f32, config: &MotionConfig) -> VisualParams {
    let distance = center_distance(rect, window_height);
    let max = max_distance(rect, window_height);
    VisualParams {
        scale: map_scale(distance, max, config.min_scale, config.max_scale),
        opacity: map_opacity(distance, max, config.min_opacity, config.max_opacity),
    }
}
