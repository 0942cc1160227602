#[macro_use]
extern crate criterion;
extern crate holdem_odds;

use holdem_odds::core::{FlatDeck, Hand};
use rand::rng;

fn deal_all_flat_deck(c: &mut criterion::Criterion) {
    let mut rng = rng();
    let deck = FlatDeck::full();

    c.bench_function("deal all from a shuffled FlatDeck", |b| {
        b.iter(|| {
            let mut flat_deck = deck.shuffled(&mut rng);
            while flat_deck.deal().is_some() {}
        });
    });
}

fn remaining_deck(c: &mut criterion::Criterion) {
    let known = Hand::new_from_str("AsKdQh7c2s").unwrap();

    c.bench_function("remaining deck after the flop", |b| {
        b.iter(|| FlatDeck::remaining(&known))
    });
}

criterion_group!(benches, deal_all_flat_deck, remaining_deck);
criterion_main!(benches);
