//! Bids are claims that a hand at least this strong is somewhere in the
//! pool.

/// The bid value and its comparisons.
mod model;
pub use self::model::Bid;

/// Free text bid parsing.
mod parse;
