#[macro_use]
extern crate criterion;
extern crate liars_poker;

use criterion::Criterion;
use liars_poker::core::{CacheCapacity, CardIter, Deck, HandEvaluator, Rankable};
use rand::rng;

fn rank_one(c: &mut Criterion) {
    let hand = Deck::new().sample(&mut rng(), 5);
    c.bench_function("Evaluate one 5 card hand", move |b| {
        b.iter(|| hand.evaluate())
    });
}

fn rank_every_subset_uncached(c: &mut Criterion) {
    let pool = Deck::new().sample(&mut rng(), 12);
    c.bench_function("Evaluate every 5 card subset of 12, no cache", move |b| {
        b.iter(|| {
            CardIter::<5>::new(&pool)
                .map(|hand| hand.evaluate())
                .count()
        })
    });
}

fn rank_every_subset_cached(c: &mut Criterion) {
    let pool = Deck::new().sample(&mut rng(), 12);
    let mut evaluator = HandEvaluator::new(CacheCapacity::Unbounded);
    c.bench_function("Evaluate every 5 card subset of 12, cached", move |b| {
        b.iter(|| {
            CardIter::<5>::new(&pool)
                .map(|hand| evaluator.evaluate(&hand))
                .count()
        })
    });
}

criterion_group!(
    benches,
    rank_one,
    rank_every_subset_uncached,
    rank_every_subset_cached
);
criterion_main!(benches);
