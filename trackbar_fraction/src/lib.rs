// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trackbar Fraction: pointer-to-fraction mapping for slider controls.
//!
//! This crate provides the pure arithmetic core shared by slider and
//! range-control surfaces: converting a pointer position inside (or outside)
//! a rectangle into a normalized fraction in `[0, 1]` along a single axis,
//! and placing a point back inside the rectangle for a given fraction.
//!
//! The conversions are total functions over plain [`kurbo`] geometry:
//!
//! - [`Direction`]: selects the horizontal or vertical axis.
//! - [`fraction_at`]: pointer position → clamped fraction. The vertical axis
//!   is inverted so that the bottom edge maps to `0.0` and the top edge to
//!   `1.0`, matching the fill-from-bottom convention of volume sliders.
//! - [`point_at_fraction`]: fraction → point on the rectangle's axis line,
//!   for positioning a thumb or playhead.
//!
//! Rectangles are expressed in viewport coordinates, as reported by a layout
//! system. A scroll offset is passed explicitly alongside the pointer
//! position; both are shifted into page space before the conversion, so the
//! result is correct regardless of how far the host surface has scrolled.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use trackbar_fraction::{Direction, fraction_at, point_at_fraction};
//!
//! // A 100x50 track whose top-left corner sits at the viewport origin.
//! let track = Rect::new(0.0, 0.0, 100.0, 50.0);
//!
//! // Pointer three quarters of the way along the horizontal axis.
//! let f = fraction_at(track, Direction::Horizontal, Point::new(75.0, 10.0), Vec2::ZERO);
//! assert_eq!(f, 0.75);
//!
//! // Positions outside the track clamp to the nearest edge.
//! let f = fraction_at(track, Direction::Horizontal, Point::new(-40.0, 10.0), Vec2::ZERO);
//! assert_eq!(f, 0.0);
//!
//! // Place a thumb center back onto the track for a fraction.
//! let thumb = point_at_fraction(track, Direction::Horizontal, 0.5);
//! assert_eq!(thumb, Point::new(50.0, 25.0));
//! ```
//!
//! ## Vertical axis
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use trackbar_fraction::{Direction, fraction_at};
//!
//! let track = Rect::new(0.0, 0.0, 20.0, 200.0);
//!
//! // The top edge is full, the bottom edge is empty.
//! assert_eq!(fraction_at(track, Direction::Vertical, Point::new(10.0, 0.0), Vec2::ZERO), 1.0);
//! assert_eq!(fraction_at(track, Direction::Vertical, Point::new(10.0, 200.0), Vec2::ZERO), 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod direction;
mod mapping;

pub use direction::Direction;
pub use mapping::{fraction_at, horizontal_fraction, point_at_fraction, vertical_fraction};
