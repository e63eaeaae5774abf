use std::str::FromStr;

use tracing::{Level, event};

use super::Bid;
use crate::core::{DETECTION_ORDER, HandCategory, LiarsPokerError, Suit, Value};

/// Find the first category whose name appears in `text`, ignoring case.
/// Returns the category along with the text that's left once the name is cut
/// out.
fn detect_category(text: &str) -> Option<(HandCategory, String)> {
    // Lower casing only touches ascii bytes so offsets line up with `text`.
    let lower = text.to_ascii_lowercase();
    DETECTION_ORDER.iter().find_map(|category| {
        let name = category.name().to_ascii_lowercase();
        lower.find(&name).map(|pos| {
            let rest = format!("{} {}", &text[..pos], &text[pos + name.len()..]);
            (*category, rest)
        })
    })
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Parse a bid out of free text like `"Two Pair, Kings and Fours"`.
///
/// The category is found by name anywhere in the text, case doesn't matter.
/// Longer names are looked for first so `"Straight Flush"` never reads as a
/// straight or a flush. Text that names no category is a High Card bid.
/// Whatever text remains is split into words which are read as ranks (`K`,
/// `Ks`, `King`, `Kings`, `10`, `Tens`, ...) and suits (`Hearts`, `Heart`,
/// ...). Any other words are ignored.
///
/// | Category | Ranks needed |
/// | --- | --- |
/// | High Card, Royal Flush | none, a High Card rank is optional |
/// | One Pair, Three of a Kind, Four of a Kind | the first rank |
/// | Flush | the last rank |
/// | Two Pair, Full House | the first two ranks, in order |
/// | Straight, Straight Flush | the first two ranks as the range ends |
///
/// Flushes, straight flushes and royal flushes pick up a suit if one is
/// named.
///
/// ```
/// use liars_poker::bid::Bid;
/// use liars_poker::core::{HandCategory, Suit, Value};
///
/// let bid: Bid = "Straight Flush, 3 to 7 of Hearts".parse().unwrap();
/// assert_eq!(HandCategory::StraightFlush, bid.category());
/// assert_eq!(Some(Value::Three), bid.range_start());
/// assert_eq!(Some(Value::Seven), bid.range_end());
/// assert_eq!(Some(Suit::Heart), bid.suit());
/// assert_eq!("Straight Flush, Hearts, 3 to 7", bid.to_string());
/// ```
impl FromStr for Bid {
    type Err = LiarsPokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (category, rest) = detect_category(text).unwrap_or_else(|| {
            event!(Level::DEBUG, text, "No hand category named, reading as High Card");
            (HandCategory::HighCard, text.to_string())
        });

        let ranks: Vec<Value> = tokens(&rest).filter_map(Value::from_bid_token).collect();
        let suit = tokens(&rest).find_map(Suit::from_bid_token);

        let missing = |needed: usize| LiarsPokerError::MissingBidRank {
            text: text.to_string(),
            category: category.to_string(),
            needed,
        };

        let bid = Bid::new(category);
        let bid = match category {
            HandCategory::HighCard => match ranks.first() {
                Some(v) => bid.with_primary(*v),
                None => bid,
            },
            HandCategory::OnePair | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind => {
                bid.with_primary(*ranks.first().ok_or_else(|| missing(1))?)
            }
            HandCategory::Flush => bid.with_primary(*ranks.last().ok_or_else(|| missing(1))?),
            HandCategory::TwoPair | HandCategory::FullHouse => match ranks[..] {
                [first, second, ..] => bid.with_primary(first).with_secondary(second),
                _ => return Err(missing(2)),
            },
            HandCategory::Straight | HandCategory::StraightFlush => match ranks[..] {
                [start, end, ..] => bid.with_range(start, end),
                _ => return Err(missing(2)),
            },
            HandCategory::RoyalFlush => bid,
        };

        let bid = match (category, suit) {
            (
                HandCategory::Flush | HandCategory::StraightFlush | HandCategory::RoyalFlush,
                Some(suit),
            ) => bid.with_suit(suit),
            _ => bid,
        };
        Ok(bid)
    }
}
