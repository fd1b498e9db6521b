//! Value types describing where things are on screen at one instant.
//!
//! Nothing here is cached across ticks: a rect is invalidated by the next
//! scroll or resize, so callers re-read it every time they need it.

/// Snapshot of an element's box relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportRect {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Full-width box described only by its vertical extent.
    pub fn vertical(top: f32, height: f32) -> Self {
        Self {
            top,
            right: 0.0,
            bottom: top + height,
            left: 0.0,
            width: 0.0,
            height,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        [
            self.top,
            self.right,
            self.bottom,
            self.left,
            self.width,
            self.height,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Current viewport dimensions. A zero height means "not available" and the
/// tick must be skipped rather than used as a denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub const UNAVAILABLE: WindowSize = WindowSize {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.height > 0.0 && self.height.is_finite()
    }
}

/// 2D point in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Host seam for geometry reads. The web crate answers from the DOM; tests
/// answer from literal rects.
pub trait Viewport<S> {
    fn rect_of(&self, source: &S) -> Option<ViewportRect>;
    fn window_size(&self) -> WindowSize;
}
