use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;

use crate::core::card::Card;
use crate::core::rank::{EvaluatedHand, HandKey};

/// How many evaluated hands a `HandCache` may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheCapacity {
    /// Never store anything, every lookup evaluates.
    Disabled,
    /// Keep everything. Five cards only have a bounded number of distinct
    /// keys so this can't grow forever.
    #[default]
    Unbounded,
    /// Keep at most this many entries, evicting the oldest insert first.
    Bounded(NonZeroUsize),
}

/// Memo of evaluated hands keyed by their canonical `HandKey`.
///
/// Looking something up can never change the answer, it only saves the work
/// of evaluating the same composition again.
#[derive(Debug, Clone, Default)]
pub struct HandCache {
    capacity: CacheCapacity,
    entries: HashMap<HandKey, EvaluatedHand>,
    // Insert order, only tracked when bounded.
    order: VecDeque<HandKey>,
    hits: u64,
    misses: u64,
}

impl HandCache {
    pub fn new(capacity: CacheCapacity) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    pub fn capacity(&self) -> CacheCapacity {
        self.capacity
    }

    /// Return the cached evaluation for `key`, evaluating and storing it on a
    /// miss.
    pub fn get_or_evaluate(&mut self, key: HandKey) -> EvaluatedHand {
        if let Some(hand) = self.entries.get(&key) {
            self.hits += 1;
            return hand.clone();
        }
        self.misses += 1;
        let hand = key.evaluate();

        match self.capacity {
            CacheCapacity::Disabled => {}
            CacheCapacity::Unbounded => {
                self.entries.insert(key, hand.clone());
            }
            CacheCapacity::Bounded(max) => {
                if self.entries.len() >= max.get() {
                    if let Some(oldest) = self.order.pop_front() {
                        self.entries.remove(&oldest);
                    }
                }
                self.entries.insert(key, hand.clone());
                self.order.push_back(key);
            }
        }
        hand
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to evaluate.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

/// Evaluates five card hands through an owned `HandCache`.
///
/// ```
/// use liars_poker::core::{CacheCapacity, Card, HandCategory, HandEvaluator};
///
/// let mut evaluator = HandEvaluator::new(CacheCapacity::Unbounded);
/// let hand: Vec<Card> = ["2 of Hearts", "2 of Spades", "2 of Clubs", "7 of Hearts", "7 of Clubs"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// assert_eq!(HandCategory::FullHouse, evaluator.evaluate(&hand).category);
/// assert_eq!(HandCategory::FullHouse, evaluator.evaluate(&hand).category);
/// assert_eq!(1, evaluator.cache().hits());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandEvaluator {
    cache: HandCache,
}

impl HandEvaluator {
    pub fn new(capacity: CacheCapacity) -> Self {
        Self {
            cache: HandCache::new(capacity),
        }
    }

    /// Classify exactly five cards.
    ///
    /// # Panics
    ///
    /// If there aren't exactly five cards.
    pub fn evaluate(&mut self, cards: &[Card]) -> EvaluatedHand {
        self.cache.get_or_evaluate(HandKey::new(cards))
    }

    pub fn cache(&self) -> &HandCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card_iter::CardIter;
    use crate::core::deck::Deck;
    use crate::core::rank::Rankable;

    #[test]
    fn test_cache_matches_direct_evaluation() {
        let d = Deck::new();
        let mut evaluator = HandEvaluator::default();
        for hand in CardIter::<5>::new(&d[..14]) {
            assert_eq!(hand.evaluate(), evaluator.evaluate(&hand));
        }
        // Same compositions again all come from the cache.
        let misses = evaluator.cache().misses();
        for hand in CardIter::<5>::new(&d[..14]) {
            assert_eq!(hand.evaluate(), evaluator.evaluate(&hand));
        }
        assert_eq!(misses, evaluator.cache().misses());
        assert!(evaluator.cache().hits() > 0);
    }

    #[test]
    fn test_key_ignores_order() {
        let d = Deck::new();
        let mut evaluator = HandEvaluator::default();
        let hand = [d[0], d[13], d[26], d[5], d[9]];
        let mut reversed = hand;
        reversed.reverse();
        evaluator.evaluate(&hand);
        evaluator.evaluate(&reversed);
        assert_eq!(1, evaluator.cache().misses());
        assert_eq!(1, evaluator.cache().hits());
        assert_eq!(1, evaluator.cache().len());
    }

    #[test]
    fn test_disabled_stores_nothing() {
        let d = Deck::new();
        let mut evaluator = HandEvaluator::new(CacheCapacity::Disabled);
        let hand = &d[..5];
        evaluator.evaluate(hand);
        evaluator.evaluate(hand);
        assert!(evaluator.cache().is_empty());
        assert_eq!(0, evaluator.cache().hits());
        assert_eq!(2, evaluator.cache().misses());
    }

    #[test]
    fn test_bounded_evicts_oldest() {
        let d = Deck::new();
        let mut cache = HandCache::new(CacheCapacity::Bounded(NonZeroUsize::new(2).unwrap()));
        let a = HandKey::new(&d[0..5]);
        let b = HandKey::new(&d[1..6]);
        let c = HandKey::new(&d[2..7]);

        cache.get_or_evaluate(a);
        cache.get_or_evaluate(b);
        cache.get_or_evaluate(c);
        assert_eq!(2, cache.len());

        // `a` was pushed out, `c` is still there.
        cache.get_or_evaluate(c);
        assert_eq!(1, cache.hits());
        cache.get_or_evaluate(a);
        assert_eq!(1, cache.hits());
        assert_eq!(4, cache.misses());
        assert_eq!(2, cache.len());
    }

    #[test]
    fn test_clear() {
        let d = Deck::new();
        let mut cache = HandCache::default();
        cache.get_or_evaluate(HandKey::new(&d[..5]));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(0, cache.misses());
        assert_eq!(CacheCapacity::Unbounded, cache.capacity());
    }
}
