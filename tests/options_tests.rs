// Host-side tests for reading page-level overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod options {
    include!("../src/options.rs");
}

use motion_core::{HysteresisBand, MotionConfig};
use options::*;
use std::collections::HashMap;

fn read(pairs: &[(&str, &str)]) -> PageOptions {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    read_options(|name| attrs.get(name).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    let opts = read(&[]);
    assert_eq!(opts, PageOptions::default());
    assert_eq!(opts.config, MotionConfig::default());
    assert_eq!(opts.band, HysteresisBand::default());
    assert_eq!(opts.reveal_spread_percent, 200.0);
}

#[test]
fn single_override_keeps_other_defaults() {
    let opts = read(&[("data-max-scale", "1.2")]);
    assert_eq!(opts.config.max_scale, 1.2);
    assert_eq!(opts.config.min_scale, 0.8);
    assert_eq!(opts.config.min_opacity, 0.3);
    assert_eq!(opts.config.update_interval_ms, 16.0);
}

#[test]
fn every_attribute_is_read() {
    let opts = read(&[
        ("data-min-scale", "0.5"),
        ("data-max-scale", "2"),
        ("data-min-opacity", "0.1"),
        ("data-max-opacity", "0.9"),
        ("data-center-threshold", "0.5"),
        ("data-update-interval", "33"),
        ("data-light-from", "0.3"),
        ("data-light-until", "0.8"),
        ("data-reveal-spread", "150"),
    ]);
    assert_eq!(
        opts.config,
        MotionConfig {
            min_scale: 0.5,
            max_scale: 2.0,
            min_opacity: 0.1,
            max_opacity: 0.9,
            center_threshold: 0.5,
            update_interval_ms: 33.0,
        }
    );
    assert_eq!(
        opts.band,
        HysteresisBand {
            light_from: 0.3,
            light_until: 0.8,
        }
    );
    assert_eq!(opts.reveal_spread_percent, 150.0);
}

#[test]
fn unparseable_values_keep_their_default() {
    let opts = read(&[
        ("data-min-scale", "big"),
        ("data-max-opacity", ""),
        ("data-center-threshold", "NaN"),
        ("data-max-scale", " 1.3 "),
    ]);
    assert_eq!(opts.config.min_scale, 0.8);
    assert_eq!(opts.config.max_opacity, 1.0);
    assert_eq!(opts.config.center_threshold, 0.3);
    // surrounding whitespace is tolerated
    assert_eq!(opts.config.max_scale, 1.3);
}

#[test]
fn invalid_combination_falls_back_to_defaults() {
    let opts = read(&[("data-min-scale", "3"), ("data-max-scale", "1")]);
    assert_eq!(opts.config, MotionConfig::default());

    let opts = read(&[("data-light-from", "0.9"), ("data-light-until", "0.1")]);
    assert_eq!(opts.band, HysteresisBand::default());

    let opts = read(&[("data-update-interval", "-5")]);
    assert_eq!(opts.config.update_interval_ms, 16.0);
}

#[test]
fn invalid_group_does_not_reset_the_other_group() {
    let opts = read(&[
        ("data-max-opacity", "4"),
        ("data-light-from", "0.25"),
    ]);
    assert_eq!(opts.config, MotionConfig::default());
    assert_eq!(opts.band.light_from, 0.25);
}

#[test]
fn negative_reveal_spread_is_ignored() {
    assert_eq!(read(&[("data-reveal-spread", "-10")]).reveal_spread_percent, 200.0);
}
