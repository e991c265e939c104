// Copyright 2026 the Cropview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cropview_geometry::{AspectRatio, CropTransform, MediaDimensions};
use kurbo::Size;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop_transform/compute");

    let cases = [
        ("portrait_viewport_landscape_media", Size::new(1080.0, 1920.0), (1280, 720)),
        ("landscape_viewport_portrait_media", Size::new(1920.0, 1080.0), (720, 1280)),
        ("matching_ratio", Size::new(1280.0, 720.0), (1920, 1080)),
    ];
    for (name, viewport, (width, height)) in cases {
        let media = MediaDimensions::new(width, height);
        group.bench_with_input(BenchmarkId::from_parameter(name), &media, |b, media| {
            b.iter(|| black_box(CropTransform::compute(black_box(viewport), *media)));
        });
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let ratio = AspectRatio::default();
    c.bench_function("aspect_ratio/measure", |b| {
        b.iter(|| black_box(ratio.measure(black_box(Size::new(1080.0, 2340.0)))));
    });
    c.bench_function("aspect_ratio/from_media", |b| {
        b.iter(|| black_box(AspectRatio::from_media(black_box(3840), black_box(2160))));
    });
}

criterion_group!(benches, bench_compute, bench_measure);
criterion_main!(benches);
