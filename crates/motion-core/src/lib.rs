//! Scroll-progress to visual-parameter mapping for the Skyworks landing page.
//!
//! Platform-free: the web frontend feeds in element rects and window sizes
//! and renders the numbers that come out. Everything here runs on the host,
//! so the motion can be tested without a browser.

pub mod background;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod throttle;

pub use background::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::MotionError;
pub use geometry::*;
pub use mapper::*;
pub use progress::*;
pub use reveal::*;
pub use scroll::*;
pub use throttle::*;
