use std::fmt;
use std::str::FromStr;

use super::LiarsPokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// 10
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The face value used when comparing hands, 2 for `Two` up to 14 for
    /// `Ace`.
    ///
    /// ```
    /// use liars_poker::core::Value;
    ///
    /// assert_eq!(2, Value::Two.rank_value());
    /// assert_eq!(14, Value::Ace.rank_value());
    /// ```
    pub const fn rank_value(self) -> u8 {
        self as u8 + 2
    }

    /// Inverse of `rank_value`.
    pub fn from_rank_value(v: u8) -> Option<Value> {
        v.checked_sub(2)
            .and_then(|idx| VALUES.get(idx as usize))
            .copied()
    }

    /// The short symbol used in card text, `2` through `10`, then `J`, `Q`,
    /// `K` and `A`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }

    /// English name, `"King"`.
    pub const fn name(self) -> &'static str {
        match self {
            Value::Two => "Two",
            Value::Three => "Three",
            Value::Four => "Four",
            Value::Five => "Five",
            Value::Six => "Six",
            Value::Seven => "Seven",
            Value::Eight => "Eight",
            Value::Nine => "Nine",
            Value::Ten => "Ten",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
            Value::Ace => "Ace",
        }
    }

    /// Plural English name, `"Kings"`, `"Sixes"`.
    pub const fn plural(self) -> &'static str {
        match self {
            Value::Two => "Twos",
            Value::Three => "Threes",
            Value::Four => "Fours",
            Value::Five => "Fives",
            Value::Six => "Sixes",
            Value::Seven => "Sevens",
            Value::Eight => "Eights",
            Value::Nine => "Nines",
            Value::Ten => "Tens",
            Value::Jack => "Jacks",
            Value::Queen => "Queens",
            Value::King => "Kings",
            Value::Ace => "Aces",
        }
    }

    /// Parse the symbol used in card text. Only the exact symbols are
    /// accepted here, bid text goes through the more lenient
    /// `from_bid_token`.
    pub fn from_symbol(s: &str) -> Option<Value> {
        VALUES.iter().find(|v| v.symbol() == s).copied()
    }

    /// Resolve a word from free bid text into a value.
    ///
    /// Accepts the card symbols, their plural forms (`Ks`, `10s`), and the
    /// English names in singular or plural form in any case.
    ///
    /// ```
    /// use liars_poker::core::Value;
    ///
    /// assert_eq!(Some(Value::Jack), Value::from_bid_token("Jacks"));
    /// assert_eq!(Some(Value::Six), Value::from_bid_token("sixes"));
    /// assert_eq!(Some(Value::King), Value::from_bid_token("Ks"));
    /// assert_eq!(None, Value::from_bid_token("of"));
    /// ```
    pub fn from_bid_token(token: &str) -> Option<Value> {
        if let Some(v) = Value::from_symbol(token) {
            return Some(v);
        }
        // Plural of a symbol. Lower case single letters are too easy to
        // confuse with english words so only the upper case forms count.
        if let Some(v) = token.strip_suffix('s').and_then(Value::from_symbol) {
            return Some(v);
        }
        VALUES.iter().copied().find(|v| {
            v.name().eq_ignore_ascii_case(token) || v.plural().eq_ignore_ascii_case(token)
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// The plural name used in card and bid text.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
            Suit::Spade => "Spades",
        }
    }

    /// Parse the exact plural suit name used in card text.
    pub fn from_name(s: &str) -> Option<Suit> {
        SUITS.iter().find(|suit| suit.name() == s).copied()
    }

    /// Resolve a word from free bid text, singular or plural, any case.
    pub fn from_bid_token(token: &str) -> Option<Suit> {
        SUITS.iter().copied().find(|suit| {
            let name = suit.name();
            name.eq_ignore_ascii_case(token) || name[..name.len() - 1].eq_ignore_ascii_case(token)
        })
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// Parse the `"<rank> of <suit>"` text form.
///
/// ```
/// use liars_poker::core::{Card, Suit, Value};
///
/// let card: Card = "K of Hearts".parse().unwrap();
/// assert_eq!(Card::new(Value::King, Suit::Heart), card);
/// assert!("K of Stars".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = LiarsPokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (value_str, suit_str) = trimmed
            .split_once(" of ")
            .ok_or_else(|| LiarsPokerError::InvalidCardFormat(trimmed.to_string()))?;
        let (value_str, suit_str) = (value_str.trim(), suit_str.trim());

        let value = Value::from_symbol(value_str)
            .ok_or_else(|| LiarsPokerError::UnexpectedValue(value_str.to_string()))?;
        let suit = Suit::from_name(suit_str)
            .ok_or_else(|| LiarsPokerError::UnexpectedSuit(suit_str.to_string()))?;
        Ok(Card { value, suit })
    }
}

/// Parse many cards, skipping any text that doesn't parse.
///
/// Each skipped item is logged. Use `str::parse` directly when a bad card
/// should be an error.
///
/// ```
/// use liars_poker::core::parse_card_list;
///
/// let cards = parse_card_list(["K of Hearts", "nonsense", "3 of Spades"]);
/// assert_eq!(2, cards.len());
/// ```
pub fn parse_card_list<I, S>(card_strs: I) -> Vec<Card>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    card_strs
        .into_iter()
        .filter_map(|s| match s.as_ref().parse::<Card>() {
            Ok(card) => Some(card),
            Err(error) => {
                tracing::event!(
                    tracing::Level::WARN,
                    input = s.as_ref(),
                    %error,
                    "Skipping card that failed to parse"
                );
                None
            }
        })
        .collect()
}
