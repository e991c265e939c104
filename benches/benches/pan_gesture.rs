// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use cropview_geometry::{CropTransform, MediaDimensions};
use cropview_gesture::tap::TapRecognizer;
use kurbo::{Point, Size, Vec2};

fn transform() -> CropTransform {
    CropTransform::compute(Size::new(1080.0, 1920.0), MediaDimensions::new(1280, 720))
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan/pan_by");

    // Alternating deltas keep hitting both clamps.
    for steps in [64_usize, 1_024, 16_384] {
        let deltas: Vec<Vec2> = (0..steps)
            .map(|i| {
                let dx = if i % 32 < 16 { -180.0 } else { 180.0 };
                Vec2::new(dx, 7.0)
            })
            .collect();
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &deltas, |b, deltas| {
            b.iter_batched(
                transform,
                |mut t| {
                    for delta in deltas {
                        black_box(t.pan_by(*delta));
                    }
                    t
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let points: Vec<Point> = (0..256)
        .map(|i| Point::new(540.0 - f64::from(i) * 3.0, 960.0 + f64::from(i % 5)))
        .collect();

    c.bench_function("pan/pointer_drag_256", |b| {
        b.iter_batched(
            || (TapRecognizer::default(), transform()),
            |(mut gesture, mut t)| {
                gesture.press(points[0]);
                for pos in &points[1..] {
                    if let Some(delta) = gesture.motion(*pos) {
                        t.pan_by(delta);
                    }
                }
                black_box((gesture.release(), t))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pan, bench_drag);
criterion_main!(benches);
