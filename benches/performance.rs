// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use patchwork::io::{parse_expression, render, TileSet};
use patchwork::Evaluator;

/// Square patchwork of `2^levels` tiles per side
fn quilt(levels: usize) -> String {
    let mut source = String::from("JUXT[carre, ROT[triangle]]");
    source = format!("SUPER[{}, ROT[ROT[{}]]]", source, source);
    for _ in 1..levels {
        source = format!(
            "SUPER[JUXT[{s}, ROT[{s}]], JUXT[ROT[ROT[{s}]], ROT[ROT[ROT[{s}]]]]]",
            s = source
        );
    }
    source
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for levels in [1, 3, 5] {
        let source = quilt(levels);
        group.bench_with_input(BenchmarkId::new("quilt", levels), &source, |b, source| {
            b.iter(|| parse_expression(black_box(source)).unwrap());
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for levels in [1, 3, 5] {
        let ast = parse_expression(&quilt(levels)).unwrap();
        group.bench_with_input(BenchmarkId::new("quilt", levels), &ast, |b, ast| {
            let evaluator = Evaluator::new();
            b.iter(|| evaluator.evaluate(black_box(ast)).unwrap());
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let grid = Evaluator::new()
        .evaluate(&parse_expression(&quilt(3)).unwrap())
        .unwrap();

    for side in [4, 15, 32] {
        let tiles = TileSet::procedural(side);
        group.bench_with_input(BenchmarkId::new("tile", side), &tiles, |b, tiles| {
            b.iter(|| render(black_box(&grid), tiles).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_evaluate, bench_render);
criterion_main!(benches);
