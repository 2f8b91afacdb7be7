//! Benchmarks for dashboard rendering
//!
//! Run with: cargo bench

use arenaboard::chart::{render_svg, ChartConfig, ChartLayout};
use arenaboard::leaderboard::{default_palette, DataPoint, Leaderboard};
use arenaboard::view::{render_page, Metadata};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn synthetic_board(months: usize) -> Leaderboard {
    let palette = default_palette();
    let providers: Vec<String> = palette.providers().map(str::to_string).collect();

    let data = (0..months)
        .map(|i| {
            let date = format!("{:04}-{:02}-01", 2000 + i / 12, i % 12 + 1);
            providers
                .iter()
                .enumerate()
                .filter(|(p, _)| (i + p) % 7 != 0)
                .fold(DataPoint::new(date), |point, (p, provider)| {
                    point.score(provider.clone(), 1100.0 + ((i * 13 + p * 29) % 450) as f64)
                })
        })
        .collect();

    Leaderboard::new(data, palette).unwrap()
}

fn bench_builtin(c: &mut Criterion) {
    let board = Leaderboard::builtin();
    let chart = ChartConfig::default();
    let meta = Metadata::default();

    let mut group = c.benchmark_group("builtin");

    group.bench_function("layout", |b| {
        b.iter(|| ChartLayout::compute(black_box(&board), black_box(&chart)))
    });

    group.bench_function("render_svg", |b| {
        b.iter(|| render_svg(black_box(&board), black_box(&chart)))
    });

    group.bench_function("render_page", |b| {
        b.iter(|| render_page(black_box(&board), black_box(&chart), black_box(&meta)))
    });

    group.finish();
}

fn bench_series_length(c: &mut Criterion) {
    let chart = ChartConfig::default();
    let mut group = c.benchmark_group("series_length");

    for months in [12, 120, 1200] {
        let board = synthetic_board(months);

        group.throughput(Throughput::Elements(months as u64));

        group.bench_function(format!("render_svg_{}", months), |b| {
            b.iter(|| render_svg(black_box(&board), black_box(&chart)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_builtin, bench_series_length);
criterion_main!(benches);
