// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer-facing types: lifecycle phases, samples, and configuration.

use kurbo::{Point, Vec2};

use trackbar_fraction::Direction;

/// Lifecycle edge reported by the external gesture recognizer.
///
/// The recognizer owns the underlying pointer state machine; the overlay
/// only reacts to its edges. `Move*` phases describe pointer travel without
/// an engaged button or touch, `Drag*` phases describe a committed drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Hover-like movement began.
    MoveStart,
    /// Hover-like movement continued.
    Move,
    /// Hover-like movement ended.
    MoveEnd,
    /// A drag was engaged.
    DragStart,
    /// The drag continued.
    Drag,
    /// The drag was released.
    DragEnd,
}

/// One recognizer report: a lifecycle edge plus the pointer state at that
/// moment.
///
/// `position` is viewport-relative; `scroll` is the host surface's scroll
/// offset at the time of the event (see `trackbar_fraction` for how the two
/// combine). `dragging` is the recognizer's drag flag and is what move-phase
/// suppression keys on: move edges delivered while a drag is in progress are
/// redundant and are dropped by the overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureSample {
    /// Which lifecycle edge this sample reports.
    pub phase: GesturePhase,
    /// Pointer position in viewport coordinates.
    pub position: Point,
    /// Host scroll offset at event time.
    pub scroll: Vec2,
    /// Whether the recognizer considers a drag to be in progress.
    pub dragging: bool,
}

impl GestureSample {
    /// Creates a sample with no scroll offset and no drag in progress.
    #[must_use]
    pub fn new(phase: GesturePhase, position: Point) -> Self {
        Self {
            phase,
            position,
            scroll: Vec2::ZERO,
            dragging: false,
        }
    }

    /// Sets the host scroll offset sampled with this event.
    #[must_use]
    pub fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll = scroll;
        self
    }

    /// Sets the recognizer's drag-in-progress flag.
    #[must_use]
    pub fn with_dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }
}

/// Configuration the overlay requests from the gesture recognizer.
///
/// Motion detection is restricted to the control's axis, and taps are
/// filtered out so that a tap never opens a drag sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Axis the recognizer should lock pointer motion to.
    pub axis: Direction,
    /// Whether taps are excluded from drag recognition.
    pub filter_taps: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_defaults_to_unscrolled_and_not_dragging() {
        let sample = GestureSample::new(GesturePhase::Move, Point::new(4.0, 5.0));
        assert_eq!(sample.scroll, Vec2::ZERO);
        assert!(!sample.dragging);
    }

    #[test]
    fn builders_override_the_defaults() {
        let sample = GestureSample::new(GesturePhase::Drag, Point::ZERO)
            .with_scroll(Vec2::new(0.0, 120.0))
            .with_dragging(true);
        assert_eq!(sample.scroll.y, 120.0);
        assert!(sample.dragging);
    }
}
