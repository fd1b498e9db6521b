// Page-level tuning read from `data-*` attributes on the mount root.
//
// Kept free of browser types: the caller hands in an attribute getter, so
// the parsing can be tested on the host.

use crate::constants::*;
use motion_core::{HysteresisBand, MotionConfig, DEFAULT_REVEAL_SPREAD_PERCENT};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageOptions {
    pub config: MotionConfig,
    pub band: HysteresisBand,
    pub reveal_spread_percent: f32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            config: MotionConfig::default(),
            band: HysteresisBand::default(),
            reveal_spread_percent: DEFAULT_REVEAL_SPREAD_PERCENT,
        }
    }
}

/// Build options from whatever the page set. A value that does not parse
/// keeps its default; a combination that does not validate falls back to the
/// defaults for that whole group.
pub fn read_options(attr: impl Fn(&str) -> Option<String>) -> PageOptions {
    let defaults = PageOptions::default();

    let mut config = defaults.config;
    config.min_scale = number(&attr, ATTR_MIN_SCALE, config.min_scale);
    config.max_scale = number(&attr, ATTR_MAX_SCALE, config.max_scale);
    config.min_opacity = number(&attr, ATTR_MIN_OPACITY, config.min_opacity);
    config.max_opacity = number(&attr, ATTR_MAX_OPACITY, config.max_opacity);
    config.center_threshold = number(&attr, ATTR_CENTER_THRESHOLD, config.center_threshold);
    config.update_interval_ms =
        number(&attr, ATTR_UPDATE_INTERVAL, config.update_interval_ms as f32) as f64;
    if let Err(e) = config.validate() {
        log::warn!("[options] {}; using default motion config", e);
        config = defaults.config;
    }

    let mut band = defaults.band;
    band.light_from = number(&attr, ATTR_LIGHT_FROM, band.light_from);
    band.light_until = number(&attr, ATTR_LIGHT_UNTIL, band.light_until);
    if let Err(e) = band.validate() {
        log::warn!("[options] {}; using default light band", e);
        band = defaults.band;
    }

    let mut reveal_spread_percent =
        number(&attr, ATTR_REVEAL_SPREAD, defaults.reveal_spread_percent);
    if reveal_spread_percent < 0.0 {
        log::warn!("[options] {} must not be negative", ATTR_REVEAL_SPREAD);
        reveal_spread_percent = defaults.reveal_spread_percent;
    }

    PageOptions {
        config,
        band,
        reveal_spread_percent,
    }
}

fn number(attr: &impl Fn(&str) -> Option<String>, name: &str, default: f32) -> f32 {
    let Some(raw) = attr(name) else {
        return default;
    };
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            log::warn!("[options] ignoring {}=\"{}\"", name, raw);
            default
        }
    }
}
