// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamped pointer-to-fraction conversions and their inverse.
//!
//! All conversions take the track rectangle in viewport coordinates together
//! with an explicit scroll offset. Pointer position and rectangle edge are
//! both shifted into page space before subtracting, so callers may feed
//! viewport-relative measurements directly while the host surface scrolls
//! underneath the gesture.

use kurbo::{Point, Rect, Vec2};

use crate::Direction;

/// Maps a pointer X coordinate to a fraction along the horizontal axis of `rect`.
///
/// The left edge maps to `0.0` and the right edge to `1.0`; positions outside
/// the rectangle clamp to the nearest edge. `x` is viewport-relative and
/// `scroll_x` is the horizontal scroll offset of the host surface.
///
/// A rectangle without positive width yields `0.0`.
#[must_use]
pub fn horizontal_fraction(rect: Rect, x: f64, scroll_x: f64) -> f64 {
    let width = rect.width();
    if width <= 0.0 {
        return 0.0;
    }
    let page_x = scroll_x + x;
    let page_left = rect.x0 + scroll_x;
    (page_x - page_left).clamp(0.0, width) / width
}

/// Maps a pointer Y coordinate to a fraction along the vertical axis of `rect`.
///
/// The mapping is inverted: the bottom edge maps to `0.0` and the top edge to
/// `1.0` (fill-from-bottom convention). Positions outside the rectangle clamp
/// to the nearest edge. `y` is viewport-relative and `scroll_y` is the
/// vertical scroll offset of the host surface.
///
/// A rectangle without positive height yields `0.0`.
#[must_use]
pub fn vertical_fraction(rect: Rect, y: f64, scroll_y: f64) -> f64 {
    let height = rect.height();
    if height <= 0.0 {
        return 0.0;
    }
    let page_y = scroll_y + y;
    let page_top = rect.y0 + scroll_y;
    1.0 - (page_y - page_top).clamp(0.0, height) / height
}

/// Maps a pointer position to a fraction along the given axis of `rect`.
///
/// Dispatches to [`horizontal_fraction`] or [`vertical_fraction`] using the
/// matching components of `position` and `scroll`.
#[must_use]
pub fn fraction_at(rect: Rect, direction: Direction, position: Point, scroll: Vec2) -> f64 {
    match direction {
        Direction::Horizontal => horizontal_fraction(rect, position.x, scroll.x),
        Direction::Vertical => vertical_fraction(rect, position.y, scroll.y),
    }
}

/// Returns the point at `fraction` along the given axis of `rect`.
///
/// The fraction is clamped to `[0, 1]` first. The returned point sits on the
/// rectangle's cross-axis centerline, which makes it directly usable as a
/// thumb or playhead center. This is the inverse of [`fraction_at`] for
/// in-range positions (up to floating-point rounding).
#[must_use]
pub fn point_at_fraction(rect: Rect, direction: Direction, fraction: f64) -> Point {
    let t = fraction.clamp(0.0, 1.0);
    match direction {
        Direction::Horizontal => Point::new(
            rect.x0 + t * rect.width(),
            rect.y0 + rect.height() * 0.5,
        ),
        Direction::Vertical => Point::new(
            rect.x0 + rect.width() * 0.5,
            rect.y0 + (1.0 - t) * rect.height(),
        ),
    }
}
