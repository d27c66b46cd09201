// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy bounds measurement for the gesture-capture surface.

use core::fmt;

use kurbo::Rect;

/// Source of the track rectangle, in viewport coordinates.
///
/// The overlay measures its bounds through this trait on every gesture
/// sample instead of caching a rectangle, so a control that moves, resizes,
/// or scrolls mid-gesture keeps mapping pointer positions correctly. Gesture
/// rates are bounded by human input speed, which keeps the per-event measure
/// affordable.
///
/// Two implementations cover the common cases:
///
/// - [`Rect`] itself is a constant provider, convenient for tests and for
///   hosts with static layout.
/// - [`LiveBounds`] wraps a `Fn() -> Rect` closure querying current layout.
pub trait RectProvider {
    /// Returns the current track rectangle.
    fn measure(&self) -> Rect;
}

impl RectProvider for Rect {
    fn measure(&self) -> Rect {
        *self
    }
}

/// Live bounds source wrapping a layout query closure.
///
/// The closure is invoked once per measurement, so the overlay always sees
/// the rectangle the layout system currently reports.
pub struct LiveBounds<F>(pub F);

impl<F: Fn() -> Rect> RectProvider for LiveBounds<F> {
    fn measure(&self) -> Rect {
        (self.0)()
    }
}

impl<F> fmt::Debug for LiveBounds<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveBounds").finish_non_exhaustive()
    }
}
