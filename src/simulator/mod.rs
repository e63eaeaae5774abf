//! Monte Carlo estimation of how likely it is that a pool of cards holds a
//! hand stronger than a bid.
//!
//! Each sample draws the unknown cards at random, then checks every five
//! card subset of the resulting pool against the bid. A pool counts once
//! towards the hit rate no matter how many of its subsets win, and each
//! winning label counts once per pool in the histogram.

use std::ops::ControlFlow;

use crate::bid::Bid;
use crate::core::{Card, LiarsPokerError};

/// Configuring a simulation.
mod builder;
pub use self::builder::{PresenceSimulationBuilder, RngPresenceSimulationBuilder};

/// The sampling loop.
mod presence;
pub use self::presence::{PresenceSimulation, evaluate_pool_for_hits};

/// What a simulation returns.
mod result;
pub use self::result::SimulationResult;

/// Samples drawn when none are configured.
pub const DEFAULT_SAMPLES: usize = 1_000;
/// Reporting threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Estimate the presence probability with the thread rng and an unbounded
/// hand cache.
///
/// ```
/// use liars_poker::bid::Bid;
/// use liars_poker::core::Value;
/// use liars_poker::simulator::simulate_presence_probability;
///
/// let result =
///     simulate_presence_probability(&[], 5, Bid::high_card(Value::Two), 0.05, 100).unwrap();
/// assert!(result.presence_probability > 0.9);
/// ```
pub fn simulate_presence_probability(
    known_cards: &[Card],
    total_cards_in_play: usize,
    bid: Bid,
    threshold: f64,
    samples: usize,
) -> Result<SimulationResult, LiarsPokerError> {
    Ok(PresenceSimulationBuilder::default()
        .known_cards(known_cards.to_vec())
        .total_cards_in_play(total_cards_in_play)
        .bid(bid)
        .threshold(threshold)
        .samples(samples)
        .build()?
        .run())
}

/// Same as `simulate_presence_probability` but reporting progress after
/// every sample. The callback can stop the run by returning
/// `ControlFlow::Break(())`.
pub fn simulate_presence_probability_with_progress<F>(
    known_cards: &[Card],
    total_cards_in_play: usize,
    bid: Bid,
    threshold: f64,
    samples: usize,
    progress: F,
) -> Result<SimulationResult, LiarsPokerError>
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    Ok(PresenceSimulationBuilder::default()
        .known_cards(known_cards.to_vec())
        .total_cards_in_play(total_cards_in_play)
        .bid(bid)
        .threshold(threshold)
        .samples(samples)
        .build()?
        .run_with_progress(progress))
}
