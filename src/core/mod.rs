//! This is the core module. It exports the cards, the deck and
//! the five card hand evaluation that everything else builds on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value, parse_card_list};

/// The error type.
mod error;
/// Export the error
pub use self::error::LiarsPokerError;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::{CardIter, combinations};

/// The ten hand categories.
mod category;
pub use self::category::HandCategory;
pub(crate) use self::category::DETECTION_ORDER;

/// 5 Card hand evaluation code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{EvaluatedHand, HandKey, Rankable, describe};

/// Memoized evaluation.
mod cache;
pub use self::cache::{CacheCapacity, HandCache, HandEvaluator};
