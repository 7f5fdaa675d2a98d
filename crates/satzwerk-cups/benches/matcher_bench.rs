// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for driver catalog parsing and fuzzy matching in the
// satzwerk-cups crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use satzwerk_core::types::DriverRecord;
use satzwerk_cups::drivers::parse_driver_catalog;
use satzwerk_cups::matcher::{DEFAULT_MAX_RESULTS, search_drivers};

/// Build a synthetic long-form catalog listing of `n` drivers.
fn build_catalog_text(n: usize) -> String {
    let makes = ["Brother", "HP", "Epson", "Canon", "Lexmark", "Kyocera"];
    let mut text = String::new();
    for i in 0..n {
        let make = makes[i % makes.len()];
        text.push_str(&format!(
            "Model:  name = drv:///{make}/{i}.ppd\n        \
             natural_language = en\n        \
             make-and-model = {make} Model-{i} series\n        \
             device-id = MFG:{make};MDL:Model-{i};\n"
        ));
    }
    text
}

fn parsed_catalog(n: usize) -> Vec<DriverRecord> {
    parse_driver_catalog(&build_catalog_text(n))
}

fn bench_catalog_parse(c: &mut Criterion) {
    let text = build_catalog_text(2000);
    c.bench_function("parse_driver_catalog_2000", |b| {
        b.iter(|| parse_driver_catalog(black_box(&text)))
    });
}

fn bench_full_window_hit(c: &mut Criterion) {
    let catalog = parsed_catalog(2000);
    c.bench_function("search_full_window_hit", |b| {
        b.iter(|| {
            search_drivers(
                black_box(&catalog),
                black_box(&["Brother Model-600"]),
                DEFAULT_MAX_RESULTS,
            )
        })
    });
}

fn bench_window_descent(c: &mut Criterion) {
    let catalog = parsed_catalog(2000);
    // Forces the matcher through every window with no hit at any size.
    c.bench_function("search_window_descent", |b| {
        b.iter(|| {
            search_drivers(
                black_box(&catalog),
                black_box(&["Nonexistent Phantom Device Kyocera"]),
                DEFAULT_MAX_RESULTS,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_catalog_parse,
    bench_full_window_hit,
    bench_window_descent
);
criterion_main!(benches);
