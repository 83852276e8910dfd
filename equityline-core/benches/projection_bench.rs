//! Criterion benchmarks for the recompute path.
//!
//! Benchmarks:
//! 1. Pure projection over books of increasing size
//! 2. Snapshot projection including the per-symbol filter

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use equityline_core::{
    AccountSnapshot, MarketSnapshot, OpenPosition, SymbolInfo, TradeDirection, project_equity,
};

fn symbol() -> SymbolInfo {
    SymbolInfo {
        name: "EURUSD".into(),
        bid: 1.1000,
        ask: 1.1002,
        pip_size: 0.0001,
        pip_value: 0.0001,
        tick_size: 0.00001,
        digits: 5,
    }
}

fn make_positions(n: usize, symbols: &[&str]) -> Vec<OpenPosition> {
    (0..n)
        .map(|i| {
            let direction = if i % 3 == 0 { TradeDirection::Sell } else { TradeDirection::Buy };
            let symbol = symbols[i % symbols.len()];
            OpenPosition::new(i as u64, symbol, direction, 10_000.0 * (1 + i % 7) as f64, i as f64)
        })
        .collect()
}

fn bench_project_equity(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_equity");
    let sym = symbol();
    for n in [1usize, 10, 100, 1_000] {
        let positions = make_positions(n, &["EURUSD"]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &positions, |b, positions| {
            b.iter(|| project_equity(black_box(10_000.0), &sym, positions, black_box(1.1050)))
        });
    }
    group.finish();
}

fn bench_snapshot_project(c: &mut Criterion) {
    let snapshot = MarketSnapshot {
        account: AccountSnapshot::new(10_000.0, "USD"),
        symbol: symbol(),
        positions: make_positions(500, &["EURUSD", "GBPUSD", "USDJPY"]),
    };
    c.bench_function("snapshot_project_mixed_symbols", |b| {
        b.iter(|| snapshot.project(black_box(1.1050)))
    });
}

criterion_group!(benches, bench_project_equity, bench_snapshot_project);
criterion_main!(benches);
