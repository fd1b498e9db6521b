use glam::Vec3;

// Default tuning for the landing page motion. Product may retune any of
// these through `MotionConfig` / `HysteresisBand` without touching the math.

// Center-focus mapping (video items)
pub const DEFAULT_MIN_SCALE: f32 = 0.8; // item size at the viewport edge
pub const DEFAULT_MAX_SCALE: f32 = 1.45; // item size when perfectly centred
pub const DEFAULT_MIN_OPACITY: f32 = 0.3;
pub const DEFAULT_MAX_OPACITY: f32 = 1.0;
pub const DEFAULT_CENTER_THRESHOLD: f32 = 0.3; // normalised distance counted as "near centre"

// Update throttling
pub const DEFAULT_UPDATE_INTERVAL_MS: f64 = 16.0; // ~60 Hz

// Background hysteresis band (intersection ratio)
pub const DEFAULT_LIGHT_FROM: f32 = 0.2;
pub const DEFAULT_LIGHT_UNTIL: f32 = 0.7;
pub const THRESHOLD_LADDER_STEPS: usize = 100; // callback on every 1% change

// Pinned scrub (video reel)
pub const DEFAULT_SCRUB_START: f32 = 0.3;
pub const DEFAULT_SCRUB_END: f32 = 1.0;

// Text reveal
pub const DEFAULT_REVEAL_SPREAD_PERCENT: f32 = 200.0;
pub const REVEAL_CHAR_FILL: f32 = 0.9; // share of each character slot spent fading in

// Camera path over the space section
pub const CAMERA_ENTER_RATIO: f32 = 0.5; // entered ratio where the path starts
pub const CAMERA_REST: Vec3 = Vec3::new(0.0, 0.0, 15.0);
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 8.0);
pub const CAMERA_MID: Vec3 = Vec3::new(0.0, 0.0, 18.0);
pub const CAMERA_END: Vec3 = Vec3::new(0.0, 10.0, 12.0);
pub const CAMERA_SPLIT: f32 = 0.6; // progress where the dolly turns into the crane
pub const PARTICLE_ROTATION_TOTAL: f32 = std::f32::consts::PI * 1.5;
