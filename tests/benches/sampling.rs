extern crate bezier3d;
extern crate bezier3d_tests;
#[macro_use]
extern crate criterion;

use bezier3d::extra::parser::parse_cubic_bezier;
use bezier3d::math::point;
use bezier3d_tests::*;
use criterion::{black_box, Criterion};

const N: u32 = 100;

fn sample_strategies(bench: &mut Criterion) {
    let curves = test_curves();

    bench.bench_function("sample bernstein", |b| {
        b.iter(|| black_box(sample_n::<Bernstein>(&curves, N)))
    });
    bench.bench_function("sample de casteljau", |b| {
        b.iter(|| black_box(sample_n::<DeCasteljau>(&curves, N)))
    });
    bench.bench_function("sample horner", |b| {
        b.iter(|| black_box(sample_n::<Horner>(&curves, N)))
    });
}

fn sample_per_axis(bench: &mut Criterion) {
    let curve = CubicBezier::new(
        point(-100.0, -100.0, 20.0),
        point(-100.0, 100.0, -20.0),
        point(100.0, -100.0, 0.0),
        point(-100.0, 100.0, 50.0),
    );

    bench.bench_function("sample point", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..=N {
                sum += curve.sample(i as f32 / N as f32).z;
            }
            black_box(sum)
        })
    });
    bench.bench_function("sample z", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..=N {
                sum += curve.z(i as f32 / N as f32);
            }
            black_box(sum)
        })
    });
}

fn parse(bench: &mut Criterion) {
    bench.bench_function("parse curve", |b| {
        b.iter(|| {
            black_box(parse_cubic_bezier(
                "1000.5 -2000 30000, -4500 8000 0.5, 5000 -1000 7000, 2500 3500 -6000",
            ))
        })
    });
}

criterion_group!(sampling, sample_strategies, sample_per_axis);
criterion_group!(parsing, parse);
criterion_main!(sampling, parsing);
