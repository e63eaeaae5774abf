use std::fmt;

use crate::core::{EvaluatedHand, HandCategory, LiarsPokerError, Suit, Value, describe};

/// A claim that a hand of at least this strength exists in the pool.
///
/// Which discriminators matter depends on the category:
///
/// * `primary`: the high card, the pair, trips or quads, the flush high card,
///   and the bigger group of two pair and full house.
/// * `secondary`: the smaller group of two pair and full house.
/// * `range_start` and `range_end`: the two ends of a straight or straight
///   flush, in either order.
/// * `suit`: flushes and straight flushes. It is shown in labels but never
///   used when comparing.
///
/// A missing discriminator is the weakest possible value. Two bids that are
/// identical on every field never beat each other.
///
/// ```
/// use liars_poker::bid::Bid;
/// use liars_poker::core::Value;
///
/// let kings_up = Bid::two_pair(Value::King, Value::Four);
/// assert!(kings_up.beats(&Bid::two_pair(Value::King, Value::Three)));
/// assert!(!Bid::one_pair(Value::Jack).beats(&Bid::two_pair(Value::Two, Value::Three)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    category: HandCategory,
    primary: Option<Value>,
    secondary: Option<Value>,
    suit: Option<Suit>,
    range_start: Option<Value>,
    range_end: Option<Value>,
}

impl Bid {
    /// A bid on a category without any discriminators.
    pub const fn new(category: HandCategory) -> Self {
        Self {
            category,
            primary: None,
            secondary: None,
            suit: None,
            range_start: None,
            range_end: None,
        }
    }

    /// A bid on a category given by its exact name.
    ///
    /// ```
    /// use liars_poker::bid::Bid;
    /// use liars_poker::core::HandCategory;
    ///
    /// assert_eq!(HandCategory::FullHouse, Bid::from_name("Full House").unwrap().category());
    /// assert!(Bid::from_name("Five of a Kind").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, LiarsPokerError> {
        Ok(Self::new(name.parse()?))
    }

    pub const fn with_primary(mut self, value: Value) -> Self {
        self.primary = Some(value);
        self
    }

    pub const fn with_secondary(mut self, value: Value) -> Self {
        self.secondary = Some(value);
        self
    }

    pub const fn with_suit(mut self, suit: Suit) -> Self {
        self.suit = Some(suit);
        self
    }

    pub const fn with_range(mut self, start: Value, end: Value) -> Self {
        self.range_start = Some(start);
        self.range_end = Some(end);
        self
    }

    pub const fn high_card(high: Value) -> Self {
        Self::new(HandCategory::HighCard).with_primary(high)
    }

    pub const fn one_pair(pair: Value) -> Self {
        Self::new(HandCategory::OnePair).with_primary(pair)
    }

    pub const fn two_pair(high: Value, low: Value) -> Self {
        Self::new(HandCategory::TwoPair)
            .with_primary(high)
            .with_secondary(low)
    }

    pub const fn three_of_a_kind(trips: Value) -> Self {
        Self::new(HandCategory::ThreeOfAKind).with_primary(trips)
    }

    pub const fn straight(start: Value, end: Value) -> Self {
        Self::new(HandCategory::Straight).with_range(start, end)
    }

    pub const fn flush(high: Value) -> Self {
        Self::new(HandCategory::Flush).with_primary(high)
    }

    pub const fn full_house(trips: Value, pair: Value) -> Self {
        Self::new(HandCategory::FullHouse)
            .with_primary(trips)
            .with_secondary(pair)
    }

    pub const fn four_of_a_kind(quads: Value) -> Self {
        Self::new(HandCategory::FourOfAKind).with_primary(quads)
    }

    pub const fn straight_flush(start: Value, end: Value) -> Self {
        Self::new(HandCategory::StraightFlush).with_range(start, end)
    }

    pub const fn royal_flush() -> Self {
        Self::new(HandCategory::RoyalFlush)
    }

    pub const fn category(&self) -> HandCategory {
        self.category
    }

    pub const fn primary(&self) -> Option<Value> {
        self.primary
    }

    pub const fn secondary(&self) -> Option<Value> {
        self.secondary
    }

    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub const fn range_start(&self) -> Option<Value> {
        self.range_start
    }

    pub const fn range_end(&self) -> Option<Value> {
        self.range_end
    }

    /// The top of the claimed straight.
    ///
    /// The two ends may be given in either order. A range between ace and
    /// five is the wheel, topped by the five. Royal flushes always top out
    /// at the ace. `None` for other categories or when no end was given.
    pub fn range_high(&self) -> Option<Value> {
        match self.category {
            HandCategory::RoyalFlush => Some(Value::Ace),
            HandCategory::Straight | HandCategory::StraightFlush => {
                match (self.range_start, self.range_end) {
                    (Some(a), Some(b)) if a.max(b) == Value::Ace && a.min(b) == Value::Five => {
                        Some(Value::Five)
                    }
                    (Some(a), Some(b)) => Some(a.max(b)),
                    (a, b) => a.or(b),
                }
            }
            _ => None,
        }
    }

    /// Everything that orders bids, most significant first.
    fn strength_key(&self) -> (u8, Option<Value>, Option<Value>, Option<Value>) {
        (
            self.category.strength(),
            self.primary,
            self.secondary,
            self.range_high(),
        )
    }

    /// Is this bid strictly stronger than `other`?
    ///
    /// Category strength decides first. Within a category the primary value,
    /// then the secondary value, then the top of the straight decide.
    /// Absent values lose to any present value.
    pub fn beats(&self, other: &Bid) -> bool {
        self.strength_key() > other.strength_key()
    }

    /// Does this concrete five card hand beat the bid?
    ///
    /// Category strength decides first. On the same category the hand's
    /// leading tie break values are held against the bid:
    ///
    /// | Category | Hand | Bid |
    /// | --- | --- | --- |
    /// | Two Pair, Full House | first two values | primary, secondary |
    /// | Straight, Straight Flush | top of the straight | top of the range |
    /// | everything else | first value | primary |
    ///
    /// The hand has to be strictly stronger, an equal hand does not beat the
    /// bid.
    ///
    /// ```
    /// use liars_poker::bid::Bid;
    /// use liars_poker::core::{Card, Rankable, Value};
    ///
    /// let hand: Vec<Card> = [
    ///     "J of Spades",
    ///     "J of Hearts",
    ///     "2 of Clubs",
    ///     "5 of Spades",
    ///     "9 of Hearts",
    /// ]
    /// .iter()
    /// .map(|s| s.parse().unwrap())
    /// .collect();
    /// let hand = hand.evaluate();
    ///
    /// assert!(Bid::one_pair(Value::Ten).is_beaten_by(&hand));
    /// assert!(!Bid::one_pair(Value::Jack).is_beaten_by(&hand));
    /// assert!(!Bid::two_pair(Value::Three, Value::Two).is_beaten_by(&hand));
    /// ```
    pub fn is_beaten_by(&self, hand: &EvaluatedHand) -> bool {
        let hand_strength = hand.category.strength();
        let bid_strength = self.category.strength();
        if hand_strength != bid_strength {
            return hand_strength > bid_strength;
        }

        let first = hand.values.first().copied();
        match hand.category {
            HandCategory::TwoPair | HandCategory::FullHouse => {
                (first, hand.values.get(1).copied()) > (self.primary, self.secondary)
            }
            HandCategory::Straight | HandCategory::StraightFlush | HandCategory::RoyalFlush => {
                first > self.range_high()
            }
            HandCategory::HighCard
            | HandCategory::OnePair
            | HandCategory::ThreeOfAKind
            | HandCategory::Flush
            | HandCategory::FourOfAKind => first > self.primary,
        }
    }

    /// The values that show up in the label, in the order `describe` wants
    /// them.
    fn label_values(&self) -> Vec<Value> {
        match self.category {
            HandCategory::TwoPair | HandCategory::FullHouse => self
                .primary
                .into_iter()
                .chain(self.primary.and(self.secondary))
                .collect(),
            HandCategory::Straight | HandCategory::StraightFlush => {
                self.range_high().map(straight_run).unwrap_or_default()
            }
            HandCategory::RoyalFlush => vec![],
            _ => self.primary.into_iter().collect(),
        }
    }

    /// Canonical label, the same text an equivalent evaluated hand gets.
    pub fn describe(&self) -> String {
        describe(self.category, &self.label_values(), self.suit)
    }
}

/// The five values of the straight topped by `high`, high to low.
fn straight_run(high: Value) -> Vec<Value> {
    if high == Value::Five {
        return vec![Value::Five, Value::Four, Value::Three, Value::Two, Value::Ace];
    }
    (0..5)
        .map_while(|i| {
            high.rank_value()
                .checked_sub(i)
                .and_then(Value::from_rank_value)
        })
        .collect()
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
