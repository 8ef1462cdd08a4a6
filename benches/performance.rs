// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for enharmonic
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Pitch stepping in sharp space
//! - Scale generation per kind
//! - Chord generation and chord-name parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use enharmonic::music::pitch::step_by;
use enharmonic::{generate_chord, generate_scale, parse_chord_name, ChordType, ScaleKind, KEY_NAMES};

/// Benchmark single-note stepping (core engine operation)
fn bench_step_by(c: &mut Criterion) {
    c.bench_function("step_by", |b| {
        b.iter(|| {
            for key in KEY_NAMES {
                black_box(step_by(black_box(key), black_box(7)).ok());
            }
        })
    });
}

/// Benchmark full scale generation for every key
fn bench_scales(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_scale");

    for kind in ScaleKind::ALL {
        group.bench_with_input(BenchmarkId::new("all_keys", kind), &kind, |b, &kind| {
            b.iter(|| {
                for key in KEY_NAMES {
                    black_box(generate_scale(key, kind).ok());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark chord generation for every chord type on one root
fn bench_chords(c: &mut Criterion) {
    c.bench_function("generate_chord_all_types", |b| {
        b.iter(|| {
            for chord_type in ChordType::ALL {
                black_box(generate_chord(black_box("Eb"), chord_type).ok());
            }
        })
    });
}

/// Benchmark the longest-suffix chord-name resolver
fn bench_chord_names(c: &mut Criterion) {
    let names = ["C", "Am", "G7", "F#m7", "Ebmaj7", "Bbmin9", "Dsus4", "Abadd9"];

    c.bench_function("parse_chord_name", |b| {
        b.iter(|| {
            for name in names {
                black_box(parse_chord_name(black_box(name)).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_step_by,
    bench_scales,
    bench_chords,
    bench_chord_names
);
criterion_main!(benches);
