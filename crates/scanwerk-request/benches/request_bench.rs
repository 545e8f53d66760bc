// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for scan request assembly, validation and
// `scanimage -A` listing parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde_json::json;

use scanwerk_core::AppConfig;
use scanwerk_device::{DeviceCapabilities, Feature, StaticProvider, features};
use scanwerk_request::RequestBuilder;

const LISTING: &str = "\
    --mode Lineart|Gray|Color [Color]
    --resolution 75|150|300|600|1200dpi [300]
    --brightness -100..100% (in steps of 1) [0]
    --contrast -100..100% (in steps of 1) [0]
    -l 0..215.9mm [0]
    -t 0..297.18mm [0]
    -x 0..215.9mm [215.9]
    -y 0..297.18mm [297.18]
";

fn flatbed() -> DeviceCapabilities {
    DeviceCapabilities::new("bench")
        .with_feature(features::WIDTH, Feature::range(0, 216, 216))
        .with_feature(features::HEIGHT, Feature::range(0, 297, 297))
        .with_feature(features::RESOLUTION, Feature::list([150, 300, 600], 300))
        .with_feature(features::MODE, Feature::list(["Gray", "Color"], "Color"))
        .with_feature(features::BRIGHTNESS, Feature::range(-100, 100, 0))
}

fn bench_build(c: &mut Criterion) {
    let builder = RequestBuilder::new(
        StaticProvider::new().with_device(flatbed()),
        AppConfig::default(),
    );

    c.bench_function("build_request", |b| {
        b.iter(|| {
            builder
                .build(black_box(json!({
                    "device": "bench",
                    "brightness": 10,
                    "contrast": 5,
                    "convertFormat": "pdf"
                })))
                .ok()
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let builder = RequestBuilder::new(
        StaticProvider::new().with_device(flatbed()),
        AppConfig::default(),
    );
    let request = builder
        .build(json!({ "device": "bench", "width": 10.5 }))
        .expect("bench device builds");

    c.bench_function("validate_request", |b| {
        b.iter(|| black_box(&request).validate(builder.config()))
    });
}

fn bench_listing(c: &mut Criterion) {
    c.bench_function("parse_scanimage_listing", |b| {
        b.iter(|| DeviceCapabilities::from_listing("bench", black_box(LISTING)))
    });
}

criterion_group!(benches, bench_build, bench_validate, bench_listing);
criterion_main!(benches);
