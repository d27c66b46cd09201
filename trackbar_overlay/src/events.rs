// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Consumer-facing notifications and the handler trait they are delivered to.

/// A slider notification produced from one gesture sample.
///
/// Fractions are clamped to `[0, 1]` along the control's axis. Intent events
/// describe hover-like pointing; change events describe an active drag.
/// [`IntentEnd`](Self::IntentEnd) carries no fraction: hover simply stopped.
/// [`ChangeEnd`](Self::ChangeEnd) carries the fraction at release, which is
/// the value the drag committed to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderEvent {
    /// Hover-like movement began at the given fraction.
    IntentStart(f64),
    /// Hover-like movement continued at the given fraction.
    Intent(f64),
    /// Hover-like movement ended.
    IntentEnd,
    /// A drag began at the given fraction.
    ChangeStart(f64),
    /// The drag moved to the given fraction.
    Change(f64),
    /// The drag released at the given fraction.
    ChangeEnd(f64),
}

impl SliderEvent {
    /// Returns the fraction carried by this event, if any.
    #[must_use]
    pub fn fraction(self) -> Option<f64> {
        match self {
            Self::IntentStart(f)
            | Self::Intent(f)
            | Self::ChangeStart(f)
            | Self::Change(f)
            | Self::ChangeEnd(f) => Some(f),
            Self::IntentEnd => None,
        }
    }

    /// Returns `true` for the change (active drag) family of events.
    #[must_use]
    pub fn is_change(self) -> bool {
        matches!(
            self,
            Self::ChangeStart(_) | Self::Change(_) | Self::ChangeEnd(_)
        )
    }

    /// Invokes the matching [`SliderHandler`] method for this event.
    pub fn deliver(self, handler: &mut impl SliderHandler) {
        match self {
            Self::IntentStart(f) => handler.on_intent_start(f),
            Self::Intent(f) => handler.on_intent(f),
            Self::IntentEnd => handler.on_intent_end(),
            Self::ChangeStart(f) => handler.on_change_start(f),
            Self::Change(f) => handler.on_change(f),
            Self::ChangeEnd(f) => handler.on_change_end(f),
        }
    }
}

/// Receiver for slider notifications.
///
/// Every method has a no-op default, so consumers implement only the
/// callbacks they care about. Any `FnMut(SliderEvent)` closure is also a
/// handler, receiving the notifications as [`SliderEvent`] values.
pub trait SliderHandler {
    /// Hover-like movement began at `fraction`.
    fn on_intent_start(&mut self, fraction: f64) {
        let _ = fraction;
    }

    /// Hover-like movement continued at `fraction`.
    fn on_intent(&mut self, fraction: f64) {
        let _ = fraction;
    }

    /// Hover-like movement ended.
    fn on_intent_end(&mut self) {}

    /// A drag began at `fraction`.
    fn on_change_start(&mut self, fraction: f64) {
        let _ = fraction;
    }

    /// The drag moved to `fraction`.
    fn on_change(&mut self, fraction: f64) {
        let _ = fraction;
    }

    /// The drag released at `fraction`.
    fn on_change_end(&mut self, fraction: f64) {
        let _ = fraction;
    }
}

impl<F: FnMut(SliderEvent)> SliderHandler for F {
    fn on_intent_start(&mut self, fraction: f64) {
        self(SliderEvent::IntentStart(fraction));
    }

    fn on_intent(&mut self, fraction: f64) {
        self(SliderEvent::Intent(fraction));
    }

    fn on_intent_end(&mut self) {
        self(SliderEvent::IntentEnd);
    }

    fn on_change_start(&mut self, fraction: f64) {
        self(SliderEvent::ChangeStart(fraction));
    }

    fn on_change(&mut self, fraction: f64) {
        self(SliderEvent::Change(fraction));
    }

    fn on_change_end(&mut self, fraction: f64) {
        self(SliderEvent::ChangeEnd(fraction));
    }
}
