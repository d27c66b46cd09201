// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trackbar Overlay: gesture wiring for slider and range controls.
//!
//! This crate turns recognizer-reported gesture lifecycle events into the two
//! notification families a slider consumer cares about:
//!
//! - **Intent**: hover-like movement across the control without an engaged
//!   drag — "the user is pointing at three quarters".
//! - **Change**: an active drag — "the user committed to three quarters".
//!
//! The crate does not recognize gestures itself. A platform gesture
//! recognizer owns the pointer state machine (it distinguishes taps, locks
//! motion to an axis, and decides when a drag starts and ends); this crate
//! consumes its reports as [`GestureSample`] values and produces
//! [`SliderEvent`] notifications, in the spirit of feeding pre-resolved hits
//! to a router rather than re-deriving them.
//!
//! ## Pieces
//!
//! - [`RectProvider`]: lazy bounds measurement, with [`Rect`](kurbo::Rect)
//!   as the constant source and [`LiveBounds`] wrapping a layout query. The
//!   track rectangle is re-measured on every sample, never cached, so layout
//!   shifts and scrolling mid-gesture are tolerated.
//! - [`SliderOverlay`]: the adapter. [`SliderOverlay::interpret`] is the
//!   pure decision core; [`SliderOverlay::dispatch`] additionally invokes a
//!   [`SliderHandler`].
//! - [`RecognizerConfig`]: what the overlay asks of the recognizer —
//!   axis-locked motion with taps filtered out.
//! - [`CaptureLayer`]: geometry of the invisible gesture-capture surface,
//!   covering the control and stacked above its nested content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trackbar_overlay::{GesturePhase, GestureSample, SliderEvent, SliderOverlay};
//!
//! // Constant bounds: a 200-wide track at the origin.
//! let overlay = SliderOverlay::new(Rect::new(0.0, 0.0, 200.0, 24.0));
//!
//! // The recognizer reports a drag start at a quarter of the track.
//! let sample = GestureSample::new(GesturePhase::DragStart, Point::new(50.0, 12.0));
//! assert_eq!(overlay.interpret(&sample), Some(SliderEvent::ChangeStart(0.25)));
//!
//! // Handlers can be closures over the event value.
//! let mut last = None;
//! overlay.dispatch(&sample, &mut |event| last = Some(event));
//! assert_eq!(last, Some(SliderEvent::ChangeStart(0.25)));
//! ```
//!
//! ## Live bounds
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trackbar_overlay::{GesturePhase, GestureSample, LiveBounds, SliderEvent, SliderOverlay};
//!
//! // A wrapped layout query is measured fresh on every sample.
//! let overlay = SliderOverlay::new(LiveBounds(|| Rect::new(0.0, 0.0, 100.0, 24.0)));
//! let sample = GestureSample::new(GesturePhase::Drag, Point::new(75.0, 12.0));
//! assert_eq!(overlay.interpret(&sample), Some(SliderEvent::Change(0.75)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod events;
mod overlay;
mod types;

pub use bounds::{LiveBounds, RectProvider};
pub use events::{SliderEvent, SliderHandler};
pub use overlay::{CaptureLayer, DEFAULT_OVERLAY_Z, SliderOverlay};
pub use types::{GesturePhase, GestureSample, RecognizerConfig};

pub use trackbar_fraction::Direction;
