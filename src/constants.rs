// DOM hooks and styling names shared by the web shims.
//
// The page marks its motion elements with `data-*` attributes; the shims
// only ever write CSS custom properties or inline styles back, so the
// stylesheet stays in charge of how a value is rendered.

// Mount point (page-level overrides live on this element too)
pub const ROOT_SELECTOR: &str = "[data-motion-root]";

// Scroll-tracked sections
pub const SPACE_SECTION_SELECTOR: &str = "section[data-space-section]";
pub const SPACE_SCENE_SELECTOR: &str = "[data-space-scene]";
pub const MARQUEE_SELECTOR: &str = "[data-marquee-section]";
pub const REEL_SELECTOR: &str = "[data-video-reel]";
pub const REVEAL_SELECTOR: &str = "[data-scroll-reveal]";

// Center-focused video items and the reel's sticky nav
pub const FOCUS_ITEM_SELECTOR: &str = "[data-video-scale]";
pub const REEL_NAV_SELECTOR: &str = "[data-reel-nav]";
pub const REEL_TITLE_SELECTOR: &str = "[data-reel-title]";
pub const REEL_COUNT_SELECTOR: &str = "[data-reel-count]";
pub const ITEM_TITLE_ATTR: &str = "data-title";

// Dark/light client section
pub const CLIENT_SECTION_SELECTOR: &str = "[data-client-section]";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";

// Page-level overrides read from the mount root
pub const ATTR_MIN_SCALE: &str = "data-min-scale";
pub const ATTR_MAX_SCALE: &str = "data-max-scale";
pub const ATTR_MIN_OPACITY: &str = "data-min-opacity";
pub const ATTR_MAX_OPACITY: &str = "data-max-opacity";
pub const ATTR_CENTER_THRESHOLD: &str = "data-center-threshold";
pub const ATTR_UPDATE_INTERVAL: &str = "data-update-interval";
pub const ATTR_LIGHT_FROM: &str = "data-light-from";
pub const ATTR_LIGHT_UNTIL: &str = "data-light-until";
pub const ATTR_REVEAL_SPREAD: &str = "data-reveal-spread";

// Custom properties written by the scroll shim
pub const PROP_MARQUEE_PROGRESS: &str = "--progress";
pub const PROP_REEL_PROGRESS: &str = "--videoProgress";
pub const PROP_CAMERA_X: &str = "--camera-x";
pub const PROP_CAMERA_Y: &str = "--camera-y";
pub const PROP_CAMERA_Z: &str = "--camera-z";
pub const PROP_PARTICLE_ROTATION: &str = "--particle-rotation";

/// A progress value measured on one element and written onto another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressHook {
    pub source: &'static str,
    pub target: &'static str,
    pub property: &'static str,
}

// The marquee runs while the space section's bottom edge leaves the viewport.
pub const MARQUEE_PROGRESS: ProgressHook = ProgressHook {
    source: SPACE_SECTION_SELECTOR,
    target: MARQUEE_SELECTOR,
    property: PROP_MARQUEE_PROGRESS,
};

pub const REEL_PROGRESS: ProgressHook = ProgressHook {
    source: REEL_SELECTOR,
    target: REEL_SELECTOR,
    property: PROP_REEL_PROGRESS,
};

// Focus loop gating
pub const FOCUS_VISIBLE_THRESHOLD: f64 = 0.1; // share of an item that must be visible
pub const FOCUS_ROOT_MARGIN: &str = "50px"; // start a little before the item enters

pub const NBSP: char = '\u{a0}';
