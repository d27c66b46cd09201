// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture adapter: recognizer samples in, slider notifications out.

use core::fmt;

use kurbo::Rect;

use trackbar_fraction::{Direction, fraction_at};

use crate::bounds::RectProvider;
use crate::events::{SliderEvent, SliderHandler};
use crate::types::{GesturePhase, GestureSample, RecognizerConfig};

/// Default stacking order of the gesture-capture surface.
pub const DEFAULT_OVERLAY_Z: i32 = 10;

/// Geometry of the invisible gesture-capture surface.
///
/// The capture surface spans the whole control and sits above its nested
/// content, so pointer input lands on the overlay rather than on whatever
/// the control renders underneath. Hosts that rank hit candidates by z order
/// can feed `z_index` straight into their depth key.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CaptureLayer {
    /// Rectangle the surface covers, in viewport coordinates.
    pub rect: Rect,
    /// Stacking order relative to the control's content.
    pub z_index: i32,
}

/// Adapter from recognizer lifecycle samples to slider notifications.
///
/// The overlay owns no interaction state. The recognizer's drag flag arrives
/// on each [`GestureSample`]; the track rectangle is re-measured through the
/// [`RectProvider`] on every value-carrying sample. Configuration is the
/// direction of travel, an enabled flag gating all forwarding, and the
/// capture-surface stacking order.
///
/// Two rules shape the mapping:
///
/// - Move samples are forwarded only while the recognizer reports no drag in
///   progress; a drag already produces change notifications and concurrent
///   intent events would be redundant.
/// - Drag samples are forwarded unconditionally (while enabled): they are
///   the edges that define the drag.
pub struct SliderOverlay<P> {
    bounds: P,
    direction: Direction,
    enabled: bool,
    overlay_z: i32,
}

impl<P: RectProvider> SliderOverlay<P> {
    /// Creates a horizontal, enabled overlay over the given bounds source.
    pub fn new(bounds: P) -> Self {
        Self {
            bounds,
            direction: Direction::default(),
            enabled: true,
            overlay_z: DEFAULT_OVERLAY_Z,
        }
    }

    /// Sets the direction of travel.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the stacking order of the capture surface.
    #[must_use]
    pub fn with_overlay_z(mut self, z_index: i32) -> Self {
        self.overlay_z = z_index;
        self
    }

    /// Returns the direction of travel.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Changes the direction of travel.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns `true` while gesture forwarding is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables all gesture forwarding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns the stacking order of the capture surface.
    #[must_use]
    pub fn overlay_z(&self) -> i32 {
        self.overlay_z
    }

    /// Returns the configuration the gesture recognizer should run with.
    ///
    /// Motion detection is locked to the control's axis and taps are
    /// filtered out, so a tap never opens a drag sequence.
    #[must_use]
    pub fn recognizer_config(&self) -> RecognizerConfig {
        RecognizerConfig {
            axis: self.direction,
            filter_taps: true,
        }
    }

    /// Measures the current capture-surface geometry.
    #[must_use]
    pub fn capture_layer(&self) -> CaptureLayer {
        CaptureLayer {
            rect: self.bounds.measure(),
            z_index: self.overlay_z,
        }
    }

    /// Interprets one recognizer sample as a slider notification.
    ///
    /// Returns `None` while disabled, and for move samples that arrive with
    /// a drag in progress. The track rectangle is measured fresh for every
    /// value-carrying sample.
    #[must_use]
    pub fn interpret(&self, sample: &GestureSample) -> Option<SliderEvent> {
        if !self.enabled {
            return None;
        }
        let fraction = || {
            fraction_at(
                self.bounds.measure(),
                self.direction,
                sample.position,
                sample.scroll,
            )
        };
        match sample.phase {
            GesturePhase::MoveStart if !sample.dragging => {
                Some(SliderEvent::IntentStart(fraction()))
            }
            GesturePhase::Move if !sample.dragging => Some(SliderEvent::Intent(fraction())),
            GesturePhase::MoveEnd if !sample.dragging => Some(SliderEvent::IntentEnd),
            GesturePhase::DragStart => Some(SliderEvent::ChangeStart(fraction())),
            GesturePhase::Drag => Some(SliderEvent::Change(fraction())),
            GesturePhase::DragEnd => Some(SliderEvent::ChangeEnd(fraction())),
            GesturePhase::MoveStart | GesturePhase::Move | GesturePhase::MoveEnd => None,
        }
    }

    /// Interprets one sample and delivers the result to `handler`.
    ///
    /// Returns `true` if a notification fired.
    pub fn dispatch(&self, sample: &GestureSample, handler: &mut impl SliderHandler) -> bool {
        match self.interpret(sample) {
            Some(event) => {
                event.deliver(handler);
                true
            }
            None => false,
        }
    }
}

impl<P> fmt::Debug for SliderOverlay<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderOverlay")
            .field("direction", &self.direction)
            .field("enabled", &self.enabled)
            .field("overlay_z", &self.overlay_z)
            .finish_non_exhaustive()
    }
}
