use std::fmt;

use crate::core::card::{Card, Suit, Value};
use crate::core::category::HandCategory;

/// The result of classifying exactly five cards.
///
/// `values` holds the tie break values for the category:
///
/// | Category | Values |
/// | --- | --- |
/// | Four of a Kind | quad, kicker |
/// | Full House | trips, pair |
/// | Three of a Kind | trips, kickers high to low |
/// | Two Pair | high pair, low pair, kicker |
/// | One Pair | pair, kickers high to low |
/// | everything else | all five values high to low |
///
/// For the wheel (`A 2 3 4 5`) the ace plays low so the values are
/// `5 4 3 2 A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluatedHand {
    pub category: HandCategory,
    pub values: Vec<Value>,
    /// The shared suit for flushes and straight flushes.
    pub suit: Option<Suit>,
}

impl EvaluatedHand {
    /// The highest ranked value that matters for this hand. For the wheel
    /// that's the five.
    pub fn top(&self) -> Value {
        self.values[0]
    }

    /// Canonical human readable label for this hand.
    ///
    /// ```
    /// use liars_poker::core::{Card, Rankable};
    ///
    /// let cards: Vec<Card> = [
    ///     "K of Spades",
    ///     "K of Hearts",
    ///     "4 of Clubs",
    ///     "4 of Spades",
    ///     "9 of Hearts",
    /// ]
    /// .iter()
    /// .map(|s| s.parse().unwrap())
    /// .collect();
    /// assert_eq!("Two Pair, Kings and Fours", cards.evaluate().describe());
    /// ```
    pub fn describe(&self) -> String {
        describe(self.category, &self.values, self.suit)
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Canonical form of five cards.
///
/// Evaluation only depends on the multiset of values and whether all the
/// suits agree, so both arrays are sorted on their own. Any two five card
/// hands with the same key evaluate identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandKey {
    /// Sorted high to low.
    values: [Value; 5],
    /// Sorted.
    suits: [Suit; 5],
}

impl HandKey {
    /// Build the key for five cards.
    ///
    /// # Panics
    ///
    /// If `cards` doesn't hold exactly five cards. Asking for anything else
    /// is a bug in the caller.
    pub fn new(cards: &[Card]) -> Self {
        assert_eq!(
            5,
            cards.len(),
            "Hand evaluation needs exactly 5 cards, got {}",
            cards.len()
        );
        let mut values = [Value::Two; 5];
        let mut suits = [Suit::Heart; 5];
        for (i, c) in cards.iter().enumerate() {
            values[i] = c.value;
            suits[i] = c.suit;
        }
        values.sort_unstable_by(|a, b| b.cmp(a));
        suits.sort_unstable();
        Self { values, suits }
    }

    /// Classify the hand. This does the real work, callers that evaluate the
    /// same compositions over and over should go through `HandEvaluator`.
    pub fn evaluate(&self) -> EvaluatedHand {
        let values = self.values;

        // Count how many of each value there are.
        let mut value_to_count = [0u8; 13];
        for v in values {
            value_to_count[v as usize] += 1;
        }
        // (count, value) with the biggest groups first and higher values
        // breaking ties.
        let mut groups: Vec<(u8, Value)> = Value::values()
            .into_iter()
            .filter(|v| value_to_count[*v as usize] > 0)
            .map(|v| (value_to_count[v as usize], v))
            .collect();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let is_flush = self.suits[0] == self.suits[4];
        let is_wheel = values == [Value::Ace, Value::Five, Value::Four, Value::Three, Value::Two];
        let is_straight = groups.len() == 5
            && (values[0].rank_value() - values[4].rank_value() == 4 || is_wheel);
        let straight_values = if is_wheel {
            vec![Value::Five, Value::Four, Value::Three, Value::Two, Value::Ace]
        } else {
            values.to_vec()
        };

        let group_values = || groups.iter().map(|(_, v)| *v).collect::<Vec<_>>();
        let flush_suit = Some(self.suits[0]);

        let (category, values, suit) = if is_flush && is_straight {
            (HandCategory::StraightFlush, straight_values, flush_suit)
        } else if groups[0].0 == 4 {
            (HandCategory::FourOfAKind, group_values(), None)
        } else if groups[0].0 == 3 && groups[1].0 == 2 {
            (HandCategory::FullHouse, group_values(), None)
        } else if is_flush {
            (HandCategory::Flush, values.to_vec(), flush_suit)
        } else if is_straight {
            (HandCategory::Straight, straight_values, None)
        } else if groups[0].0 == 3 {
            (HandCategory::ThreeOfAKind, group_values(), None)
        } else if groups[0].0 == 2 && groups[1].0 == 2 {
            (HandCategory::TwoPair, group_values(), None)
        } else if groups[0].0 == 2 {
            (HandCategory::OnePair, group_values(), None)
        } else {
            (HandCategory::HighCard, values.to_vec(), None)
        };

        EvaluatedHand {
            category,
            values,
            suit,
        }
    }
}

/// Can this turn into an evaluated hand?
pub trait Rankable {
    /// Classify exactly five cards. Card order doesn't matter.
    ///
    /// # Panics
    ///
    /// If there aren't exactly five cards.
    fn evaluate(&self) -> EvaluatedHand;
}

/// Implementation for any slice of cards, so `Vec<Card>` and `[Card; 5]`
/// work as well.
impl Rankable for [Card] {
    fn evaluate(&self) -> EvaluatedHand {
        HandKey::new(self).evaluate()
    }
}

/// Render the `"low to high"` part of a straight label. The wheel is written
/// `5 to A`.
fn straight_range(values: &[Value]) -> Option<String> {
    let high = *values.first()?;
    let low = *values.last()?;
    if high == Value::Five && low == Value::Ace {
        Some(format!("{} to {}", high, low))
    } else {
        Some(format!("{} to {}", low, high))
    }
}

/// Render the canonical label for a category and its tie break values.
///
/// These labels are the keys of the simulation histogram, so two hands with
/// the same category and the same discriminating values (and suit for
/// flushes) always produce the same text.
///
/// Missing values are tolerated so that incomplete bids can be described,
/// whatever can't be filled in is left off.
///
/// ```
/// use liars_poker::core::{describe, HandCategory, Suit, Value};
///
/// assert_eq!(
///     "Flush, Spades, High King",
///     describe(HandCategory::Flush, &[Value::King, Value::Nine], Some(Suit::Spade))
/// );
/// assert_eq!(
///     "Full House, Queens over Twos",
///     describe(HandCategory::FullHouse, &[Value::Queen, Value::Two], None)
/// );
/// ```
pub fn describe(category: HandCategory, values: &[Value], suit: Option<Suit>) -> String {
    let first = values.first().copied();
    let second = values.get(1).copied();

    let detail = match category {
        HandCategory::HighCard => first.map(|v| format!("High {}", v.name())),
        HandCategory::OnePair | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind => {
            first.map(|v| v.plural().to_string())
        }
        HandCategory::TwoPair => match (first, second) {
            (Some(a), Some(b)) => Some(format!("{} and {}", a.plural(), b.plural())),
            (Some(a), None) => Some(a.plural().to_string()),
            _ => None,
        },
        HandCategory::FullHouse => match (first, second) {
            (Some(a), Some(b)) => Some(format!("{} over {}", a.plural(), b.plural())),
            (Some(a), None) => Some(a.plural().to_string()),
            _ => None,
        },
        HandCategory::Straight => straight_range(values),
        HandCategory::Flush => {
            let high = first.map(|v| format!("High {}", v.name()));
            match (suit, high) {
                (Some(s), Some(h)) => Some(format!("{}, {}", s, h)),
                (Some(s), None) => Some(s.to_string()),
                (None, h) => h,
            }
        }
        HandCategory::StraightFlush => match (suit, straight_range(values)) {
            (Some(s), Some(r)) => Some(format!("{}, {}", s, r)),
            (Some(s), None) => Some(s.to_string()),
            (None, r) => r,
        },
        HandCategory::RoyalFlush => {
            let range = format!("{} to {}", Value::Ten, Value::Ace);
            match suit {
                Some(s) => Some(format!("{}, {}", s, range)),
                None => Some(range),
            }
        }
    };

    match detail {
        Some(d) => format!("{}, {}", category, d),
        None => category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(strs: &[&str]) -> Vec<Card> {
        strs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_high_card_hand() {
        let hand = cards(&[
            "A of Diamonds",
            "8 of Hearts",
            "9 of Clubs",
            "10 of Clubs",
            "5 of Clubs",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::HighCard, rank.category);
        assert_eq!(
            vec![Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five],
            rank.values
        );
        assert_eq!(None, rank.suit);
        assert_eq!("High Card, High Ace", rank.describe());
    }

    #[test]
    fn test_flush() {
        let hand = cards(&[
            "A of Diamonds",
            "8 of Diamonds",
            "9 of Diamonds",
            "10 of Diamonds",
            "5 of Diamonds",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::Flush, rank.category);
        assert_eq!(Some(Suit::Diamond), rank.suit);
        assert_eq!("Flush, Diamonds, High Ace", rank.describe());
    }

    #[test]
    fn test_full_house() {
        let hand = cards(&[
            "A of Diamonds",
            "A of Clubs",
            "9 of Diamonds",
            "9 of Clubs",
            "9 of Spades",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::FullHouse, rank.category);
        assert_eq!(vec![Value::Nine, Value::Ace], rank.values);
        assert_eq!("Full House, Nines over Aces", rank.describe());
    }

    #[test]
    fn test_two_pair() {
        let hand = cards(&[
            "A of Diamonds",
            "A of Clubs",
            "9 of Diamonds",
            "9 of Clubs",
            "10 of Spades",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::TwoPair, rank.category);
        assert_eq!(vec![Value::Ace, Value::Nine, Value::Ten], rank.values);
        assert_eq!("Two Pair, Aces and Nines", rank.describe());
    }

    #[test]
    fn test_one_pair() {
        let hand = cards(&[
            "A of Diamonds",
            "A of Clubs",
            "9 of Diamonds",
            "8 of Clubs",
            "10 of Spades",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::OnePair, rank.category);
        assert_eq!(
            vec![Value::Ace, Value::Ten, Value::Nine, Value::Eight],
            rank.values
        );
        assert_eq!("One Pair, Aces", rank.describe());
    }

    #[test]
    fn test_four_of_a_kind() {
        let hand = cards(&[
            "A of Diamonds",
            "A of Clubs",
            "A of Spades",
            "A of Hearts",
            "10 of Spades",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::FourOfAKind, rank.category);
        assert_eq!(vec![Value::Ace, Value::Ten], rank.values);
        assert_eq!("Four of a Kind, Aces", rank.describe());
    }

    #[test]
    fn test_three_of_a_kind() {
        let hand = cards(&[
            "2 of Clubs",
            "2 of Spades",
            "2 of Hearts",
            "5 of Spades",
            "6 of Diamonds",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::ThreeOfAKind, rank.category);
        assert_eq!(vec![Value::Two, Value::Six, Value::Five], rank.values);
        assert_eq!("Three of a Kind, Twos", rank.describe());
    }

    #[test]
    fn test_straight() {
        let hand = cards(&[
            "2 of Clubs",
            "3 of Spades",
            "4 of Hearts",
            "5 of Spades",
            "6 of Diamonds",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::Straight, rank.category);
        assert_eq!(Value::Six, rank.top());
        assert_eq!("Straight, 2 to 6", rank.describe());
    }

    #[test]
    fn test_broadway() {
        let hand = cards(&[
            "10 of Clubs",
            "J of Spades",
            "Q of Hearts",
            "K of Spades",
            "A of Diamonds",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::Straight, rank.category);
        assert_eq!("Straight, 10 to A", rank.describe());
    }

    #[test]
    fn test_wheel() {
        let hand = cards(&[
            "A of Diamonds",
            "2 of Clubs",
            "3 of Spades",
            "4 of Hearts",
            "5 of Spades",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::Straight, rank.category);
        assert_eq!(
            vec![Value::Five, Value::Four, Value::Three, Value::Two, Value::Ace],
            rank.values
        );
        assert_eq!("Straight, 5 to A", rank.describe());
    }

    #[test]
    fn test_steel_wheel() {
        let hand = cards(&[
            "A of Hearts",
            "2 of Hearts",
            "3 of Hearts",
            "4 of Hearts",
            "5 of Hearts",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::StraightFlush, rank.category);
        assert_eq!(Value::Five, rank.top());
        assert_eq!("Straight Flush, Hearts, 5 to A", rank.describe());
    }

    #[test]
    fn test_royal_flush_is_top_straight_flush() {
        let hand = cards(&[
            "10 of Spades",
            "J of Spades",
            "Q of Spades",
            "K of Spades",
            "A of Spades",
        ]);
        let rank = hand.evaluate();
        assert_eq!(HandCategory::StraightFlush, rank.category);
        assert_eq!(Value::Ace, rank.top());
        assert_eq!("Straight Flush, Spades, 10 to A", rank.describe());
    }

    #[test]
    fn test_almost_straight() {
        // A K Q J 9 is not a straight even though it has five distinct values.
        let hand = cards(&[
            "A of Spades",
            "K of Hearts",
            "Q of Spades",
            "J of Spades",
            "9 of Spades",
        ]);
        assert_eq!(HandCategory::HighCard, hand.evaluate().category);
        // Neither is the wrap around J Q K A 2.
        let hand = cards(&[
            "A of Spades",
            "K of Hearts",
            "Q of Spades",
            "J of Spades",
            "2 of Spades",
        ]);
        assert_eq!(HandCategory::HighCard, hand.evaluate().category);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut hand = cards(&[
            "K of Spades",
            "4 of Hearts",
            "K of Clubs",
            "9 of Spades",
            "4 of Spades",
        ]);
        let first = hand.evaluate();
        hand.reverse();
        assert_eq!(first, hand.evaluate());
        hand.swap(0, 3);
        assert_eq!(first, hand.evaluate());
        assert_eq!(first, hand.evaluate());
    }

    #[test]
    #[should_panic]
    fn test_four_cards_panics() {
        let hand = cards(&["K of Spades", "4 of Hearts", "K of Clubs", "9 of Spades"]);
        hand.evaluate();
    }

    #[test]
    #[should_panic]
    fn test_six_cards_panics() {
        let hand = cards(&[
            "K of Spades",
            "4 of Hearts",
            "K of Clubs",
            "9 of Spades",
            "2 of Spades",
            "3 of Spades",
        ]);
        hand.evaluate();
    }

    #[test]
    fn test_describe_partial() {
        assert_eq!("High Card", describe(HandCategory::HighCard, &[], None));
        assert_eq!(
            "Two Pair, Kings",
            describe(HandCategory::TwoPair, &[Value::King], None)
        );
        assert_eq!(
            "Flush, High Queen",
            describe(HandCategory::Flush, &[Value::Queen], None)
        );
        assert_eq!(
            "Royal Flush, 10 to A",
            describe(HandCategory::RoyalFlush, &[], None)
        );
        assert_eq!(
            "Royal Flush, Clubs, 10 to A",
            describe(HandCategory::RoyalFlush, &[], Some(Suit::Club))
        );
        assert_eq!(
            "Straight Flush, 3 to 7",
            describe(
                HandCategory::StraightFlush,
                &[Value::Seven, Value::Six, Value::Five, Value::Four, Value::Three],
                None
            )
        );
    }
}
