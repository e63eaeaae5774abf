use std::fmt;
use std::str::FromStr;

use super::LiarsPokerError;

/// All the different possible hand categories, weakest first.
///
/// `RoyalFlush` only exists so that bids can name it. Evaluated hands never
/// carry it: an ace high straight flush is reported as `StraightFlush`, and
/// for comparisons a royal flush counts as that top straight flush.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to ace all of the same suit.
    RoyalFlush,
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::OnePair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalFlush,
];

/// The order categories are looked for in free text. Longer names that
/// contain shorter ones have to come first.
pub(crate) const DETECTION_ORDER: [HandCategory; 10] = [
    HandCategory::RoyalFlush,
    HandCategory::StraightFlush,
    HandCategory::FourOfAKind,
    HandCategory::FullHouse,
    HandCategory::Flush,
    HandCategory::Straight,
    HandCategory::ThreeOfAKind,
    HandCategory::TwoPair,
    HandCategory::OnePair,
    HandCategory::HighCard,
];

impl HandCategory {
    pub const fn categories() -> [HandCategory; 10] {
        CATEGORIES
    }

    /// The nominal rank, 0 for high card up to 9 for royal flush.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Rank used when comparing strength. Same as `rank` except that a
    /// royal flush sits at the straight flush tier.
    pub const fn strength(self) -> u8 {
        match self {
            HandCategory::RoyalFlush => HandCategory::StraightFlush as u8,
            other => other as u8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact category names, ignoring case and surrounding whitespace.
impl FromStr for HandCategory {
    type Err = LiarsPokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CATEGORIES
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| LiarsPokerError::UnknownHandCategory(s.to_string()))
    }
}
