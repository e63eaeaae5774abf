//! liars_poker estimates how likely it is that the cards in play
//! hold a poker hand stronger than the standing bid in a game of
//! Liar's Poker.
//!
//! Some of the cards in the pool are known (your own hand), the rest are
//! drawn at random many times over. Every five card subset of every drawn
//! pool is evaluated and compared with the bid.
//!
//! ```
//! use liars_poker::bid::Bid;
//! use liars_poker::core::Card;
//! use liars_poker::simulator::PresenceSimulationBuilder;
//!
//! let known: Vec<Card> = ["K of Hearts", "K of Spades", "3 of Clubs"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let bid: Bid = "One Pair, Queens".parse().unwrap();
//!
//! let result = PresenceSimulationBuilder::default()
//!     .known_cards(known)
//!     .total_cards_in_play(12)
//!     .bid(bid)
//!     .samples(200)
//!     .build()
//!     .unwrap()
//!     .run();
//!
//! // The pair of kings is already there.
//! assert_eq!(1.0, result.presence_probability);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Cards, the deck, and five card hand evaluation.
pub mod core;

/// Bids and their comparisons.
pub mod bid;

/// The Monte Carlo presence simulator.
pub mod simulator;
