//! Benchmark for categorical figure building and SVG encoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_catplot::prelude::*;

const DAYS: [&str; 4] = ["Thu", "Fri", "Sat", "Sun"];

fn dataset(size: usize) -> DataFrame {
    let day: Vec<&str> = (0..size).map(|i| DAYS[i % 4]).collect();
    let smoker: Vec<&str> = (0..size).map(|i| if i % 3 == 0 { "Yes" } else { "No" }).collect();
    let bill: Vec<f32> = (0..size).map(|i| 10.0 + (i as f32 * 0.37).sin() * 8.0).collect();
    DataFrame::new()
        .with_str("day", &day)
        .with_str("smoker", &smoker)
        .with_f32("total_bill", &bill)
}

fn kind_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("catplot_kind");
    let data = dataset(2_000);

    for kind in PlotKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| {
                let plot = CatPlot::new(data.clone()).x("day").hue("smoker").kind(kind).seed(0).n_boot(200);
                let plot = if kind == PlotKind::Count { plot } else { plot.y("total_bill") };
                plot.build().unwrap()
            });
        });
    }

    group.finish();
}

fn swarm_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm_plot");

    for size in [100, 1_000, 5_000] {
        let data = dataset(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                CatPlot::new(black_box(data.clone()))
                    .x("day")
                    .y("total_bill")
                    .kind(PlotKind::Swarm)
                    .build()
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn svg_benchmark(c: &mut Criterion) {
    let figure = CatPlot::new(dataset(1_000))
        .x("day")
        .y("total_bill")
        .col("smoker")
        .kind(PlotKind::Violin)
        .build()
        .unwrap();

    c.bench_function("svg_encode_violin", |b| {
        b.iter(|| SvgEncoder::from_figure(black_box(&figure)).unwrap().render());
    });
}

criterion_group!(benches, kind_benchmark, swarm_benchmark, svg_benchmark);
criterion_main!(benches);
