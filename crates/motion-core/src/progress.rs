//! Scroll-progress controller.
//!
//! The controller owns the per-target bookkeeping and the throttle; the host
//! shim owns the event listeners and the animation-frame handle. Each tick
//! runs [`evaluate`], a pure function of one rect and the window size, for
//! every tracked target and hands the results to a [`Sink`].

use crate::camera::{CameraPath, CameraPose};
use crate::config::{MotionConfig, ScrubWindow};
use crate::error::{MotionError, Result};
use crate::geometry::{Viewport, ViewportRect, WindowSize};
use crate::mapper::{map_visual, VisualParams};
use crate::reveal::reveal_lead_percent;
use crate::scroll::{
    entered_ratio, is_near_center, pinned_scrub_progress, sticky_exit_progress, visibility_ratio,
};
use crate::throttle::{Admission, Throttle};

/// How a target's geometry becomes a number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mapping {
    /// Section bottom crossing the last viewport height (marquee).
    StickyExit,
    /// Pinned section scrolled past the viewport top (video reel).
    PinnedScrub(ScrubWindow),
    /// Scale/opacity by distance from the viewport centre (video items).
    CenterFocus,
    /// Particle camera pose (space section).
    Camera(CameraPath),
    /// Character fill of a heading.
    Reveal { spread_percent: f32 },
}

/// A value ready for a visual consumer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Output {
    Progress(f32),
    Visual(VisualParams),
    Camera(CameraPose),
    Reveal {
        lead_percent: f32,
        spread_percent: f32,
    },
}

impl Output {
    fn check_finite(self) -> Result<Self> {
        let ok = match &self {
            Output::Progress(p) => p.is_finite(),
            Output::Visual(v) => v.scale.is_finite() && v.opacity.is_finite(),
            Output::Camera(c) => c.is_finite(),
            Output::Reveal { lead_percent, .. } => lead_percent.is_finite(),
        };
        if ok {
            Ok(self)
        } else {
            Err(MotionError::Calculation(self.kind()))
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Output::Progress(_) => "progress",
            Output::Visual(_) => "scale/opacity",
            Output::Camera(_) => "camera pose",
            Output::Reveal { .. } => "reveal lead",
        }
    }
}

/// Writes outputs to whatever renders them.
pub trait Sink<T> {
    fn write(&mut self, target: &T, output: &Output) -> Result<()>;
}

/// Pure transition for one target: `Ok(None)` means "hold the previous value".
pub fn evaluate(
    mapping: &Mapping,
    rect: &ViewportRect,
    window: WindowSize,
    config: &MotionConfig,
) -> Result<Option<Output>> {
    if !window.is_available() {
        return Err(MotionError::EnvironmentUnavailable);
    }
    let wh = window.height;
    let out = match mapping {
        Mapping::StickyExit => Some(Output::Progress(sticky_exit_progress(rect, wh))),
        Mapping::PinnedScrub(w) => {
            Some(Output::Progress(pinned_scrub_progress(rect, w.start, w.end)))
        }
        Mapping::CenterFocus => {
            if visibility_ratio(rect, wh) <= 0.0 {
                Some(Output::Visual(VisualParams::resting(config)))
            } else if is_near_center(rect, wh, config.center_threshold) {
                Some(Output::Visual(map_visual(rect, wh, config)))
            } else {
                None
            }
        }
        Mapping::Camera(path) => Some(Output::Camera(path.pose(entered_ratio(rect, wh)))),
        Mapping::Reveal { spread_percent } => Some(Output::Reveal {
            lead_percent: reveal_lead_percent(rect, wh),
            spread_percent: *spread_percent,
        }),
    };
    out.map(Output::check_finite).transpose()
}

/// Value a mapping shows when it is parked (off screen, disposed, failing).
pub fn resting_output(mapping: &Mapping, config: &MotionConfig) -> Output {
    match mapping {
        Mapping::StickyExit | Mapping::PinnedScrub(_) => Output::Progress(0.0),
        Mapping::CenterFocus => Output::Visual(VisualParams::resting(config)),
        Mapping::Camera(path) => Output::Camera(path.pose(f32::NEG_INFINITY)),
        Mapping::Reveal { spread_percent } => Output::Reveal {
            lead_percent: 0.0,
            spread_percent: *spread_percent,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Tracking,
    Disposed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub written: usize,
    pub held: usize,
    pub failed: usize,
}

struct Track<S, T> {
    label: String,
    source: S,
    target: T,
    mapping: Mapping,
    last: Option<Output>,
}

pub struct ProgressController<S, T> {
    config: MotionConfig,
    tracks: Vec<Track<S, T>>,
    throttle: Throttle,
    alive: bool,
    error: Option<MotionError>,
}

impl<S, T> ProgressController<S, T> {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            throttle: Throttle::new(config.update_interval_ms),
            config,
            tracks: Vec::new(),
            alive: true,
            error: None,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> ControllerState {
        if !self.alive {
            ControllerState::Disposed
        } else if self.tracks.is_empty() {
            ControllerState::Idle
        } else {
            ControllerState::Tracking
        }
    }

    /// Start tracking `source`, writing results to `target`. A lookup that came
    /// back empty is recorded as [`MotionError::TargetNotFound`] and nothing is
    /// tracked for it.
    pub fn register(
        &mut self,
        selector: &str,
        source: Option<S>,
        target: Option<T>,
        mapping: Mapping,
    ) -> Result<()> {
        if !self.alive {
            return Ok(());
        }
        let (Some(source), Some(target)) = (source, target) else {
            let err = MotionError::TargetNotFound(selector.to_string());
            log::warn!("[progress] {}", err);
            self.error = Some(err.clone());
            return Err(err);
        };
        log::debug!("[progress] tracking `{}` as {:?}", selector, mapping);
        self.tracks.push(Track {
            label: selector.to_string(),
            source,
            target,
            mapping,
            last: None,
        });
        Ok(())
    }

    /// Ask for an update at `now_ms`. After disposal every request coalesces
    /// into nothing.
    pub fn request(&mut self, now_ms: f64) -> Admission {
        if !self.alive {
            return Admission::Coalesce;
        }
        self.throttle.admit(now_ms)
    }

    pub fn frame_fired(&mut self) {
        self.throttle.frame_fired();
    }

    /// One iteration of a render loop that already runs every frame: ticks
    /// only once the update interval has elapsed. The next frame always comes,
    /// so a too-early call leaves nothing pending.
    pub fn tick_frame<V, K>(
        &mut self,
        now_ms: f64,
        viewport: &V,
        sink: &mut K,
    ) -> Option<TickReport>
    where
        V: Viewport<S>,
        K: Sink<T>,
    {
        match self.request(now_ms) {
            Admission::Run => Some(self.tick(viewport, sink)),
            Admission::Defer | Admission::Coalesce => {
                self.throttle.frame_fired();
                None
            }
        }
    }

    pub fn has_pending_frame(&self) -> bool {
        self.throttle.is_pending()
    }

    /// Re-measure every target and push the results. A target whose rect
    /// cannot be read, whose math fails, or whose consumer rejects the write
    /// keeps its previous output.
    pub fn tick<V, K>(&mut self, viewport: &V, sink: &mut K) -> TickReport
    where
        V: Viewport<S>,
        K: Sink<T>,
    {
        let mut report = TickReport::default();
        if !self.alive || self.tracks.is_empty() {
            return report;
        }
        let window = viewport.window_size();
        if !window.is_available() {
            log::debug!("[progress] window size unavailable, skipping tick");
            self.error = Some(MotionError::EnvironmentUnavailable);
            return report;
        }
        for track in &mut self.tracks {
            let Some(rect) = viewport.rect_of(&track.source).filter(|r| r.is_finite()) else {
                self.error = Some(MotionError::GeometryUnavailable(track.label.clone()));
                report.failed += 1;
                continue;
            };
            let output = match evaluate(&track.mapping, &rect, window, &self.config) {
                Ok(Some(output)) => output,
                Ok(None) => {
                    report.held += 1;
                    continue;
                }
                Err(err) => {
                    log::debug!("[progress] `{}`: {}", track.label, err);
                    self.error = Some(err);
                    report.failed += 1;
                    continue;
                }
            };
            if track.last == Some(output) {
                report.held += 1;
                continue;
            }
            match sink.write(&track.target, &output) {
                Ok(()) => {
                    track.last = Some(output);
                    report.written += 1;
                }
                Err(err) => {
                    log::warn!("[progress] write for `{}` skipped: {}", track.label, err);
                    self.error = Some(err);
                    report.failed += 1;
                }
            }
        }
        report
    }

    /// Park every target at its resting value.
    pub fn rest<K: Sink<T>>(&mut self, sink: &mut K) -> usize {
        if !self.alive {
            return 0;
        }
        let mut written = 0;
        for track in &mut self.tracks {
            let output = resting_output(&track.mapping, &self.config);
            if track.last == Some(output) {
                continue;
            }
            match sink.write(&track.target, &output) {
                Ok(()) => {
                    track.last = Some(output);
                    written += 1;
                }
                Err(err) => {
                    log::warn!("[progress] rest for `{}` skipped: {}", track.label, err);
                    self.error = Some(err);
                }
            }
        }
        written
    }

    pub fn last_output(&self, selector: &str) -> Option<Output> {
        self.tracks
            .iter()
            .find(|t| t.label == selector)
            .and_then(|t| t.last)
    }

    pub fn sources(&self) -> impl Iterator<Item = &S> {
        self.tracks.iter().map(|t| &t.source)
    }

    pub fn error(&self) -> Option<&MotionError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Drop every target and stop accepting work. Returns whether a deferred
    /// frame was pending, so the shim knows to cancel it.
    pub fn dispose(&mut self) -> bool {
        self.alive = false;
        self.tracks.clear();
        self.throttle.reset()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
