// Copyright 2025 the Trackbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the per-event path: pointer-to-fraction mapping on its own,
//! and a full interpret pass through the overlay with a live bounds provider.
//!
//! The interesting number is the cost of one gesture sample, since the
//! overlay re-measures bounds on every event instead of caching them.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use trackbar_fraction::{Direction, fraction_at};
use trackbar_overlay::{GesturePhase, GestureSample, LiveBounds, SliderOverlay};

fn sample_stream(rect: Rect) -> Vec<GestureSample> {
    let mut samples = Vec::with_capacity(130);
    samples.push(GestureSample::new(
        GesturePhase::DragStart,
        Point::new(rect.x0, rect.y0 + 5.0),
    ));
    for i in 0..128 {
        let x = rect.x0 + rect.width() * f64::from(i) / 127.0;
        samples.push(
            GestureSample::new(GesturePhase::Drag, Point::new(x, rect.y0 + 5.0))
                .with_scroll(Vec2::new(0.0, f64::from(i)))
                .with_dragging(true),
        );
    }
    samples.push(GestureSample::new(
        GesturePhase::DragEnd,
        Point::new(rect.x1, rect.y0 + 5.0),
    ));
    samples
}

fn bench_fraction(c: &mut Criterion) {
    let rect = Rect::new(40.0, 60.0, 440.0, 76.0);

    c.bench_function("fraction_at/horizontal", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..128 {
                let x = f64::from(i) * 4.0;
                acc += fraction_at(
                    black_box(rect),
                    Direction::Horizontal,
                    black_box(Point::new(x, 70.0)),
                    Vec2::ZERO,
                );
            }
            acc
        });
    });

    c.bench_function("fraction_at/vertical", |b| {
        let rail = Rect::new(0.0, 0.0, 16.0, 512.0);
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..128 {
                let y = f64::from(i) * 4.0;
                acc += fraction_at(
                    black_box(rail),
                    Direction::Vertical,
                    black_box(Point::new(8.0, y)),
                    Vec2::ZERO,
                );
            }
            acc
        });
    });
}

fn bench_interpret(c: &mut Criterion) {
    let rect = Rect::new(40.0, 60.0, 440.0, 76.0);
    let samples = sample_stream(rect);

    c.bench_function("interpret/constant_bounds", |b| {
        let overlay = SliderOverlay::new(rect);
        b.iter(|| {
            let mut fired = 0_u32;
            for sample in &samples {
                if overlay.interpret(black_box(sample)).is_some() {
                    fired += 1;
                }
            }
            fired
        });
    });

    c.bench_function("interpret/live_bounds", |b| {
        let overlay = SliderOverlay::new(LiveBounds(|| Rect::new(40.0, 60.0, 440.0, 76.0)));
        b.iter(|| {
            let mut fired = 0_u32;
            for sample in &samples {
                if overlay.interpret(black_box(sample)).is_some() {
                    fired += 1;
                }
            }
            fired
        });
    });
}

criterion_group!(benches, bench_fraction, bench_interpret);
criterion_main!(benches);
