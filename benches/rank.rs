#[macro_use]
extern crate criterion;
extern crate holdem_odds;
extern crate rand;

use criterion::Criterion;
use holdem_odds::core::{CardIter, FlatDeck, evaluate, score_five};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rank_one(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let d = FlatDeck::full().shuffled(&mut rng);
    let hand = [d[0], d[1], d[2], d[3], d[4]];
    c.bench_function("Rank one 5 card hand", move |b| {
        b.iter(|| score_five(&hand))
    });
}

fn rank_best_seven(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let d = FlatDeck::full().shuffled(&mut rng);
    let hand = d[..7].to_vec();
    c.bench_function("Rank best 5card hand from 7", move |b| {
        b.iter(|| evaluate(&hand))
    });
}

fn iter_seven(c: &mut Criterion) {
    let d = FlatDeck::full();
    let hand = d[..7].to_vec();
    c.bench_function("Iterate 5 card subsets of 7", move |b| {
        b.iter(|| CardIter::new(&hand, 5).count())
    });
}

criterion_group!(benches, rank_one, rank_best_seven, iter_seven);
criterion_main!(benches);
