use std::collections::HashSet;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::card::{Card, Suit, Value};

/// `Deck` is an ordered collection of cards that allows easy
/// indexing into the cards.
///
/// A fresh deck always has the same order: every value of hearts from two to
/// ace, then diamonds, clubs and spades. The order carries no meaning but it
/// keeps tests reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use liars_poker::core::{Card, Deck, Suit, Value};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(52, deck.len());
    /// assert_eq!(Card::new(Value::Two, Suit::Heart), deck[0]);
    /// assert_eq!(Card::new(Value::Ace, Suit::Spade), deck[51]);
    /// ```
    pub fn new() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|s| Value::values().into_iter().map(move |v| Card::new(v, s)))
            .collect();
        Self { cards }
    }

    /// Return a copy of this deck without any of the `known` cards.
    ///
    /// Known cards that aren't in the deck are ignored. Checking for
    /// duplicates is left up to the caller.
    ///
    /// ```
    /// use liars_poker::core::{Card, Deck, Suit, Value};
    ///
    /// let known = [Card::new(Value::Ace, Suit::Spade), Card::new(Value::Ace, Suit::Spade)];
    /// let remaining = Deck::new().remove_known(&known);
    /// assert_eq!(51, remaining.len());
    /// assert!(!remaining.contains(&known[0]));
    /// ```
    pub fn remove_known(&self, known: &[Card]) -> Deck {
        let known: HashSet<&Card> = known.iter().collect();
        Deck {
            cards: self
                .cards
                .iter()
                .filter(|c| !known.contains(c))
                .copied()
                .collect(),
        }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }
    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Get an iterator over the cards in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Draw `n` cards uniformly at random without replacement.
    ///
    /// Every `n` card subset of the deck is equally likely no matter the
    /// deck order. If `n` is larger than the deck the whole deck is returned
    /// in random order.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Card> {
        self.cards.choose_multiple(rng, n).copied().collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
