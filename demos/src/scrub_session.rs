// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a scripted hover + drag session through a [`SliderOverlay`] and
//! prints the notifications a consumer would receive.
//!
//! The "recognizer" here is a hard-coded list of lifecycle samples standing
//! in for a platform gesture source; the point of the demo is the adapter's
//! output, not gesture detection.

use kurbo::{Point, Rect, Vec2};
use trackbar_fraction::{Direction, point_at_fraction};
use trackbar_overlay::{GesturePhase, GestureSample, SliderHandler, SliderOverlay};

struct Console {
    label: &'static str,
}

impl SliderHandler for Console {
    fn on_intent_start(&mut self, fraction: f64) {
        println!("[{}] intent start  @ {fraction:.2}", self.label);
    }

    fn on_intent(&mut self, fraction: f64) {
        println!("[{}] intent        @ {fraction:.2}", self.label);
    }

    fn on_intent_end(&mut self) {
        println!("[{}] intent end", self.label);
    }

    fn on_change_start(&mut self, fraction: f64) {
        println!("[{}] change start  @ {fraction:.2}", self.label);
    }

    fn on_change(&mut self, fraction: f64) {
        println!("[{}] change        @ {fraction:.2}", self.label);
    }

    fn on_change_end(&mut self, fraction: f64) {
        println!("[{}] change end    @ {fraction:.2}", self.label);
    }
}

fn main() {
    // A seek bar: 400 wide, sitting 60 pixels down a scrolled page.
    let seek_bar = Rect::new(40.0, 60.0, 440.0, 76.0);
    let overlay = SliderOverlay::new(seek_bar);
    let mut console = Console { label: "seek" };

    println!("recognizer config: {:?}", overlay.recognizer_config());
    println!("capture layer:     {:?}", overlay.capture_layer());
    println!();

    // The user glances across the bar without pressing...
    let hover = [
        GestureSample::new(GesturePhase::MoveStart, Point::new(140.0, 70.0)),
        GestureSample::new(GesturePhase::Move, Point::new(240.0, 70.0)),
        GestureSample::new(GesturePhase::MoveEnd, Point::new(240.0, 70.0)),
    ];
    // ...then grabs the playhead and scrubs to the end while the page
    // scrolls underneath the pointer.
    let scrub = [
        GestureSample::new(GesturePhase::DragStart, Point::new(240.0, 70.0)),
        GestureSample::new(GesturePhase::Drag, Point::new(340.0, 70.0))
            .with_dragging(true),
        GestureSample::new(GesturePhase::Drag, Point::new(440.0, 70.0))
            .with_scroll(Vec2::new(0.0, 24.0))
            .with_dragging(true),
        GestureSample::new(GesturePhase::DragEnd, Point::new(440.0, 70.0)),
    ];

    for sample in hover.iter().chain(&scrub) {
        overlay.dispatch(sample, &mut console);
    }

    println!();

    // A vertical volume rail fills from the bottom.
    let rail = Rect::new(500.0, 40.0, 516.0, 240.0);
    let volume = SliderOverlay::new(rail).with_direction(Direction::Vertical);
    let mut console = Console { label: "volume" };

    let set_volume = [
        GestureSample::new(GesturePhase::DragStart, Point::new(508.0, 200.0)),
        GestureSample::new(GesturePhase::Drag, Point::new(508.0, 90.0)).with_dragging(true),
        GestureSample::new(GesturePhase::DragEnd, Point::new(508.0, 90.0)),
    ];
    for sample in &set_volume {
        volume.dispatch(sample, &mut console);
    }

    let thumb = point_at_fraction(rail, Direction::Vertical, 0.75);
    println!("[volume] thumb at 75% sits at {thumb:?}");
}
