use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;
use std::time::Instant;

use rand::Rng;
use tracing::{Level, event};

use crate::bid::Bid;
use crate::core::{Card, CardIter, Deck, HandEvaluator, combinations};

use super::SimulationResult;

/// Evaluate every five card subset of `pool` and collect the labels of
/// the ones that beat `bid`.
///
/// Each label appears once no matter how many subsets produce it. An empty
/// set means the pool has nothing stronger than the bid. Pools with fewer
/// than five cards never have anything.
pub fn evaluate_pool_for_hits(
    evaluator: &mut HandEvaluator,
    pool: &[Card],
    bid: &Bid,
) -> HashSet<String> {
    let mut seen = HashSet::new();
    for hand in CardIter::<5>::new(pool) {
        let evaluated = evaluator.evaluate(&hand);
        if bid.is_beaten_by(&evaluated) {
            seen.insert(evaluated.describe());
        }
    }
    seen
}

/// A ready to run presence simulation.
///
/// Created by `RngPresenceSimulationBuilder`, which has already checked the
/// configuration. Each call to `run` starts from scratch, only the hand cache
/// carries over.
#[derive(Debug)]
pub struct PresenceSimulation<R: Rng> {
    pub(crate) known_cards: Vec<Card>,
    pub(crate) remaining_deck: Deck,
    pub(crate) cards_to_draw: usize,
    pub(crate) bid: Bid,
    pub(crate) threshold: f64,
    pub(crate) samples: usize,
    pub(crate) evaluator: HandEvaluator,
    pub(crate) rng: Option<R>,
}

impl<R: Rng> PresenceSimulation<R> {
    pub fn known_cards(&self) -> &[Card] {
        &self.known_cards
    }

    /// The deck the unknown cards are drawn from.
    pub fn remaining_deck(&self) -> &Deck {
        &self.remaining_deck
    }

    /// How many unknown cards each sample draws.
    pub fn cards_to_draw(&self) -> usize {
        self.cards_to_draw
    }

    pub fn bid(&self) -> &Bid {
        &self.bid
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn evaluator(&self) -> &HandEvaluator {
        &self.evaluator
    }

    /// Run every sample.
    pub fn run(&mut self) -> SimulationResult {
        self.run_with_progress(|_, _| ControlFlow::Continue(()))
    }

    /// Run the simulation, calling `progress` with `(completed, total)` after
    /// every sample.
    ///
    /// Returning `ControlFlow::Break(())` from `progress` stops the run. The
    /// result then covers only the samples completed so far and is marked
    /// `cancelled`.
    pub fn run_with_progress<F>(&mut self, progress: F) -> SimulationResult
    where
        F: FnMut(usize, usize) -> ControlFlow<()>,
    {
        match self.rng.take() {
            Some(mut rng) => {
                let result = self.run_inner(&mut rng, progress);
                self.rng = Some(rng);
                result
            }
            None => self.run_inner(&mut rand::rng(), progress),
        }
    }

    fn run_inner<G, F>(&mut self, rng: &mut G, mut progress: F) -> SimulationResult
    where
        G: Rng + ?Sized,
        F: FnMut(usize, usize) -> ControlFlow<()>,
    {
        let start = Instant::now();
        let _span = tracing::debug_span!(
            "presence_simulation",
            bid = %self.bid,
            known = self.known_cards.len(),
            draw = self.cards_to_draw,
            samples = self.samples,
        )
        .entered();
        event!(
            Level::DEBUG,
            subsets_per_pool = combinations(self.known_cards.len() + self.cards_to_draw, 5),
            remaining = self.remaining_deck.len(),
            "Starting presence simulation"
        );

        let mut hit_count: usize = 0;
        let mut matching_hands: HashMap<String, usize> = HashMap::new();

        // The known cards are in every pool. If they beat the bid by
        // themselves that's a certain hit.
        let mut known_hit = false;
        if self.known_cards.len() >= 5 {
            let seen = evaluate_pool_for_hits(&mut self.evaluator, &self.known_cards, &self.bid);
            if !seen.is_empty() {
                known_hit = true;
                hit_count += 1;
                event!(Level::DEBUG, labels = seen.len(), "Known cards already beat the bid");
            }
            for label in seen {
                *matching_hands.entry(label).or_insert(0) += 1;
            }
        }

        let mut total_samples = 0;
        let mut cancelled = false;
        let mut pool: Vec<Card> = Vec::with_capacity(self.known_cards.len() + self.cards_to_draw);
        for _ in 0..self.samples {
            pool.clear();
            pool.extend_from_slice(&self.known_cards);
            pool.extend(self.remaining_deck.sample(rng, self.cards_to_draw));

            let seen = evaluate_pool_for_hits(&mut self.evaluator, &pool, &self.bid);
            if !seen.is_empty() {
                hit_count += 1;
            }
            for label in seen {
                *matching_hands.entry(label).or_insert(0) += 1;
            }
            total_samples += 1;

            if progress(total_samples, self.samples).is_break() {
                cancelled = true;
                event!(
                    Level::INFO,
                    completed = total_samples,
                    requested = self.samples,
                    "Presence simulation cancelled"
                );
                break;
            }
        }

        // A certain hit also shows up in every sample so the count can run
        // one over the samples.
        let presence_probability = if total_samples == 0 {
            0.0
        } else {
            (hit_count as f64 / total_samples as f64).min(1.0)
        };

        event!(
            Level::INFO,
            hit_count,
            total_samples,
            presence_probability,
            "{} / {} pools had stronger hands",
            hit_count,
            total_samples
        );
        event!(
            Level::DEBUG,
            cache_hits = self.evaluator.cache().hits(),
            cache_misses = self.evaluator.cache().misses(),
            cache_len = self.evaluator.cache().len(),
            "Hand cache stats"
        );

        SimulationResult {
            presence_probability,
            matching_hands,
            total_samples,
            elapsed_time: start.elapsed(),
            threshold: self.threshold,
            known_hit,
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HandCategory, Value};

    fn cards(strs: &[&str]) -> Vec<Card> {
        strs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_pool_dedups_labels() {
        // Five different king high spade flushes.
        let pool = cards(&[
            "K of Spades",
            "9 of Spades",
            "7 of Spades",
            "5 of Spades",
            "3 of Spades",
            "2 of Spades",
        ]);
        let mut evaluator = HandEvaluator::default();
        let seen = evaluate_pool_for_hits(&mut evaluator, &pool, &Bid::flush(Value::Queen));
        let expected: HashSet<String> = ["Flush, Spades, High King".to_string()].into();
        assert_eq!(expected, seen);
    }

    #[test]
    fn test_pool_collects_every_winning_label() {
        let pool = cards(&[
            "K of Spades",
            "K of Hearts",
            "4 of Clubs",
            "4 of Spades",
            "9 of Hearts",
            "9 of Clubs",
        ]);
        let mut evaluator = HandEvaluator::default();
        let seen = evaluate_pool_for_hits(&mut evaluator, &pool, &Bid::one_pair(Value::Ace));
        let expected: HashSet<String> = [
            "Two Pair, Kings and Nines",
            "Two Pair, Kings and Fours",
            "Two Pair, Nines and Fours",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(expected, seen);
    }

    #[test]
    fn test_pool_nothing_beats() {
        let pool = cards(&[
            "2 of Spades",
            "3 of Hearts",
            "4 of Clubs",
            "7 of Spades",
            "9 of Hearts",
        ]);
        let mut evaluator = HandEvaluator::default();
        let bid = Bid::new(HandCategory::OnePair);
        assert!(evaluate_pool_for_hits(&mut evaluator, &pool, &bid).is_empty());
    }

    #[test]
    fn test_small_pool_has_no_hands() {
        let pool = cards(&["A of Spades", "A of Hearts", "A of Clubs"]);
        let mut evaluator = HandEvaluator::default();
        let bid = Bid::new(HandCategory::HighCard);
        assert!(evaluate_pool_for_hits(&mut evaluator, &pool, &bid).is_empty());
    }
}
