// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Axis along which a slider control reads pointer motion.
///
/// The direction selects which coordinate component of a pointer position is
/// mapped to a fraction, and whether the mapping is inverted:
///
/// - [`Horizontal`](Self::Horizontal): left edge maps to `0.0`, right edge to `1.0`.
/// - [`Vertical`](Self::Vertical): bottom edge maps to `0.0`, top edge to `1.0`
///   (fill-from-bottom convention).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pointer X drives the fraction.
    #[default]
    Horizontal,
    /// Pointer Y drives the fraction, inverted.
    Vertical,
}

impl Direction {
    /// Returns `true` for [`Direction::Horizontal`].
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Returns the component of `position` read along this axis.
    #[must_use]
    pub fn component_of(self, position: Point) -> f64 {
        match self {
            Self::Horizontal => position.x,
            Self::Vertical => position.y,
        }
    }

    /// Returns the component of a scroll offset along this axis.
    #[must_use]
    pub fn scroll_component_of(self, scroll: Vec2) -> f64 {
        match self {
            Self::Horizontal => scroll.x,
            Self::Vertical => scroll.y,
        }
    }
}
