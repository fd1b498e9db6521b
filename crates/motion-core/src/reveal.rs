//! Character-by-character text fill driven by scroll.
//!
//! The heading is split into `count` characters spread over `spread_percent`
//! of its own height; each character fades in over most of its slot once the
//! heading's lead past the viewport bottom reaches that slot.

use crate::constants::REVEAL_CHAR_FILL;
use crate::geometry::ViewportRect;
use crate::scroll::clamped_progress;

/// How far the heading's top sits above the viewport bottom, in percent of
/// its own height. Unclamped.
pub fn reveal_lead_percent(rect: &ViewportRect, window_height: f32) -> f32 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    (window_height - rect.top) / rect.height * 100.0
}

/// Start and end of character `index`'s fade window, in lead percent.
pub fn char_window(index: usize, count: usize, spread_percent: f32) -> (f32, f32) {
    let step = spread_percent / count.max(1) as f32;
    let start = index as f32 * step;
    (start, start + step * REVEAL_CHAR_FILL)
}

/// Opacity of character `index` for the given lead.
pub fn char_opacity(lead_percent: f32, index: usize, count: usize, spread_percent: f32) -> f32 {
    let (start, end) = char_window(index, count, spread_percent);
    if end <= start {
        return if lead_percent >= start { 1.0 } else { 0.0 };
    }
    clamped_progress((lead_percent - start) / (end - start))
}
