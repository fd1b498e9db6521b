//! Pure scroll math: geometry snapshot in, numbers out.
//!
//! Every function here is deterministic and side-effect free; calling one
//! twice with the same rect and window height gives the same answer.

use crate::geometry::{Point, ViewportRect};

/// Fraction of the element's own height that is inside the vertical viewport.
///
/// 0 when the element is entirely above (`bottom <= 0`) or entirely below
/// (`top >= window_height`) the viewport. An element taller than the viewport
/// never reaches 1 because the overlap is measured against its own height.
pub fn visibility_ratio(rect: &ViewportRect, window_height: f32) -> f32 {
    if rect.bottom <= 0.0 || rect.top >= window_height {
        return 0.0;
    }
    if rect.height <= 0.0 {
        return 0.0;
    }
    let visible_top = rect.top.max(0.0);
    let visible_bottom = rect.bottom.min(window_height);
    let visible_height = visible_bottom - visible_top;
    clamped_progress(visible_height / rect.height)
}

/// Distance between the element's vertical midpoint and the viewport's.
#[inline]
pub fn center_distance(rect: &ViewportRect, window_height: f32) -> f32 {
    (rect.center_y() - window_height / 2.0).abs()
}

/// Largest centre-to-centre distance at which the element can still overlap
/// the viewport. Used as the normalisation denominator; callers guard a zero
/// window height upstream.
#[inline]
pub fn max_distance(rect: &ViewportRect, window_height: f32) -> f32 {
    window_height / 2.0 + rect.height / 2.0
}

/// Cubic ease `t²(3 - 2t)`; expects `t` already clamped to [0, 1].
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamp a raw progress into [0, 1]. NaN collapses to 0.
#[inline]
pub fn clamped_progress(raw: f32) -> f32 {
    if raw.is_nan() {
        return 0.0;
    }
    clamp(raw, 0.0, 1.0)
}

/// Linear interpolation that lands exactly on `a` at 0 and `b` at 1.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// True when the element's normalised centre distance is within `threshold`.
pub fn is_near_center(rect: &ViewportRect, window_height: f32, threshold: f32) -> bool {
    let max = max_distance(rect, window_height);
    if max <= 0.0 {
        return false;
    }
    center_distance(rect, window_height) / max <= threshold
}

/// Progress of an element through the document scroll range that starts when
/// its top reaches the viewport bottom and ends when its bottom leaves the top.
pub fn document_scroll_progress(
    scroll_y: f32,
    element_top: f32,
    element_height: f32,
    window_height: f32,
) -> f32 {
    let start = element_top - window_height;
    let end = element_top + element_height;
    if end <= start {
        return 0.0;
    }
    clamped_progress((scroll_y - start) / (end - start))
}

/// Progress of a section's bottom edge across the last viewport height before
/// it leaves: 0 while the bottom is at or below the viewport bottom, 1 once it
/// has reached the viewport top.
pub fn sticky_exit_progress(rect: &ViewportRect, window_height: f32) -> f32 {
    let start = rect.bottom - window_height;
    let end = rect.bottom;
    let span = end - start;
    let span = if span == 0.0 { 1.0 } else { span };
    clamped_progress((0.0 - start) / span)
}

/// Progress of a pinned section scrolled past the viewport top, mapped so that
/// `start_fraction..end_fraction` of its height becomes 0..1.
pub fn pinned_scrub_progress(rect: &ViewportRect, start_fraction: f32, end_fraction: f32) -> f32 {
    let total = rect.height;
    let y = clamp(-rect.top, 0.0, total.max(0.0));
    let start_at = total * start_fraction;
    let end_at = total * end_fraction;
    let span = end_at - start_at;
    let span = if span == 0.0 { 1.0 } else { span };
    clamped_progress((y - start_at) / span)
}

/// How far the element's top has travelled up from the viewport bottom, in
/// units of its own height. Unclamped: negative before it enters, above 1 once
/// its bottom has passed the viewport bottom.
pub fn entered_ratio(rect: &ViewportRect, window_height: f32) -> f32 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    (window_height - rect.top) / rect.height
}

/// Index of the rect whose centre sits closest to the viewport centre.
/// Unreadable entries are skipped; ties keep the earlier index.
pub fn nearest_to_center(rects: &[Option<ViewportRect>], window_height: f32) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, rect) in rects.iter().enumerate() {
        let Some(rect) = rect else { continue };
        let d = center_distance(rect, window_height);
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

#[inline]
pub fn point_distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
