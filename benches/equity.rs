#[macro_use]
extern crate criterion;
extern crate holdem_odds;

use criterion::Criterion;
use holdem_odds::core::{FlatDeck, Hand};
use holdem_odds::holdem::{RngEquitySimulationBuilder, compute_outs};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn simulate_one_trial(c: &mut Criterion) {
    let hand = Hand::new_from_str("AdKh").unwrap();
    let board = Hand::new_from_str("8c8s2d").unwrap();
    let mut sim = RngEquitySimulationBuilder::with_rng(StdRng::seed_from_u64(420))
        .hand(&hand)
        .board(&board)
        .build()
        .unwrap();

    c.bench_function("Simulate one trial on the flop", move |b| {
        b.iter(|| sim.simulate())
    });
}

fn equity_preflop(c: &mut Criterion) {
    let hand = Hand::new_from_str("AdKh").unwrap();
    let mut group = c.benchmark_group("equity");
    group.sample_size(10);
    group.bench_function("10,000 trials preflop", |b| {
        b.iter(|| {
            RngEquitySimulationBuilder::with_rng(StdRng::seed_from_u64(7))
                .hand(&hand)
                .build()
                .unwrap()
                .run()
        })
    });
    group.finish();
}

fn outs_on_flop(c: &mut Criterion) {
    let known = Hand::new_from_str("AhKh7h2h9c").unwrap();
    let remaining = FlatDeck::remaining(&known);
    c.bench_function("Outs on the flop", move |b| {
        b.iter(|| compute_outs(&known, &remaining[..]))
    });
}

criterion_group!(benches, simulate_one_trial, equity_preflop, outs_on_flop);
criterion_main!(benches);
