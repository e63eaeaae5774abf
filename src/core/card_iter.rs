use crate::core::card::Card;

/// Iterate over every `N` card combination of a slice of cards.
///
/// Combinations come out in lexicographic order of their positions in the
/// slice, each one exactly once. Nothing is produced if the slice holds fewer
/// than `N` cards.
///
/// ```
/// use liars_poker::core::{CardIter, Deck};
///
/// let deck = Deck::new();
/// let seven = &deck[..7];
/// assert_eq!(21, CardIter::<5>::new(seven).count());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a, const N: usize> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],
    // Set of current offsets being used to create card sets.
    idx: [usize; N],
    // Has the first combination been handed out yet.
    started: bool,
    done: bool,
}

impl<'a, const N: usize> CardIter<'a, N> {
    pub fn new(possible_cards: &'a [Card]) -> Self {
        let mut idx = [0; N];
        for (i, v) in idx.iter_mut().enumerate() {
            *v = i;
        }
        Self {
            possible_cards,
            idx,
            started: false,
            done: possible_cards.len() < N,
        }
    }

    /// Move `idx` to the next combination. Returns false once every
    /// combination has been produced.
    fn advance(&mut self) -> bool {
        let len = self.possible_cards.len();
        // Find the right most position that can still move forward.
        let Some(level) = (0..N).rev().find(|&i| self.idx[i] < len - N + i) else {
            return false;
        };
        self.idx[level] += 1;
        // Everything after it restarts right behind it.
        for i in level + 1..N {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }
}

impl<const N: usize> Iterator for CardIter<'_, N> {
    type Item = [Card; N];

    fn next(&mut self) -> Option<[Card; N]> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.idx.map(|i| self.possible_cards[i]))
    }
}

/// Number of ways to choose `k` items from `n`.
///
/// ```
/// use liars_poker::core::combinations;
///
/// assert_eq!(2_598_960, combinations(52, 5));
/// assert_eq!(0, combinations(4, 5));
/// ```
pub fn combinations(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i + 1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Suit, Value};
    use crate::core::deck::Deck;
    use std::collections::HashSet;

    #[test]
    fn test_iter_one() {
        let cards = vec![Card::new(Value::Two, Suit::Spade)];

        for combo in CardIter::<1>::new(&cards) {
            assert_eq!(1, combo.len());
        }

        assert_eq!(1, CardIter::<1>::new(&cards).count());
    }

    #[test]
    fn test_iter_two() {
        let cards = vec![
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::Three, Suit::Spade),
            Card::new(Value::Four, Suit::Spade),
        ];

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::<2>::new(&cards).count());

        // Make sure that everything has two cards and they are different.
        for combo in CardIter::<2>::new(&cards) {
            assert!(combo[0] != combo[1]);
        }
    }

    #[test]
    fn test_iter_too_few_cards() {
        let d = Deck::new();
        assert_eq!(0, CardIter::<5>::new(&d[..4]).count());
        assert_eq!(0, CardIter::<5>::new(&[]).count());
    }

    #[test]
    fn test_iter_exact() {
        let d = Deck::new();
        let all: Vec<[Card; 5]> = CardIter::<5>::new(&d[..5]).collect();
        assert_eq!(vec![[d[0], d[1], d[2], d[3], d[4]]], all);
    }

    #[test]
    fn test_iter_unique_combinations() {
        let d = Deck::new();
        let pool = &d[..12];
        let seen: HashSet<[Card; 5]> = CardIter::<5>::new(pool).collect();
        assert_eq!(combinations(12, 5) as usize, seen.len());
    }

    #[test]
    fn test_iter_deck() {
        let d = Deck::new();
        assert_eq!(2_598_960, CardIter::<5>::new(&d[..]).count());
    }

    #[test]
    fn test_combinations() {
        assert_eq!(1, combinations(5, 5));
        assert_eq!(6, combinations(6, 5));
        assert_eq!(15_504, combinations(20, 5));
        assert_eq!(1, combinations(3, 0));
    }
}
