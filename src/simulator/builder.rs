use rand::Rng;
use rand::rngs::ThreadRng;

use crate::bid::Bid;
use crate::core::{CacheCapacity, Card, Deck, HandEvaluator, LiarsPokerError};

use super::{DEFAULT_SAMPLES, DEFAULT_THRESHOLD, PresenceSimulation};

/// # PresenceSimulationBuilder
///
/// `RngPresenceSimulationBuilder` is a builder to configure a presence
/// simulation. The bid and the total number of cards in play are required,
/// everything else has a default.
///
/// `PresenceSimulationBuilder` is a type alias for
/// `RngPresenceSimulationBuilder<ThreadRng>` which is the default builder.
///
/// ## Setters
///
/// Each setter will set the value to the passed in value. Then return
/// the mutated builder.
///
/// ## Examples
///
/// ```
/// use liars_poker::bid::Bid;
/// use liars_poker::core::Card;
/// use liars_poker::simulator::PresenceSimulationBuilder;
///
/// let known: Vec<Card> = vec!["K of Hearts".parse().unwrap(), "3 of Spades".parse().unwrap()];
/// let mut sim = PresenceSimulationBuilder::default()
///     .known_cards(known)
///     .total_cards_in_play(10)
///     .bid("Two Pair, Jacks and Threes".parse::<Bid>().unwrap())
///     .samples(50)
///     .build()
///     .unwrap();
/// let result = sim.run();
/// assert_eq!(50, result.total_samples);
/// ```
///
/// Pass in a seeded rng for a reproducible run:
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use liars_poker::bid::Bid;
/// use liars_poker::core::Value;
/// use liars_poker::simulator::RngPresenceSimulationBuilder;
///
/// let run = |seed| {
///     RngPresenceSimulationBuilder::default()
///         .total_cards_in_play(8)
///         .bid(Bid::one_pair(Value::Queen))
///         .samples(100)
///         .rng(StdRng::seed_from_u64(seed))
///         .build()
///         .unwrap()
///         .run()
/// };
/// assert_eq!(run(420).matching_hands, run(420).matching_hands);
/// ```
#[derive(Debug)]
pub struct RngPresenceSimulationBuilder<R: Rng> {
    known_cards: Vec<Card>,
    total_cards_in_play: Option<usize>,
    bid: Option<Bid>,
    threshold: f64,
    samples: usize,
    cache_capacity: CacheCapacity,
    rng: Option<R>,
}

impl<R: Rng> RngPresenceSimulationBuilder<R> {
    /// Cards that are certainly in the pool, usually your own hand.
    pub fn known_cards(mut self, known_cards: Vec<Card>) -> Self {
        self.known_cards = known_cards;
        self
    }

    /// The pool size, known and unknown cards together.
    pub fn total_cards_in_play(mut self, total: usize) -> Self {
        self.total_cards_in_play = Some(total);
        self
    }

    /// The bid to beat.
    pub fn bid(mut self, bid: Bid) -> Self {
        self.bid = Some(bid);
        self
    }

    /// Reporting threshold for `SimulationResult::frequent_hands`. It doesn't
    /// change how the simulation runs.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Number of random pools to draw.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Bound the hand evaluation cache.
    pub fn cache_capacity(mut self, capacity: CacheCapacity) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Draw with this rng instead of the thread rng.
    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Check the configuration and create the simulation.
    ///
    /// Fails with `InvalidConfiguration` when the bid or the number of cards
    /// in play is missing, when there are more known cards than cards in
    /// play, when more cards would have to be drawn than the deck has left,
    /// or when the threshold isn't within `[0, 1]`.
    pub fn build(self) -> Result<PresenceSimulation<R>, LiarsPokerError> {
        let bid = self.bid.ok_or_else(|| {
            LiarsPokerError::InvalidConfiguration("a bid is required".to_string())
        })?;
        let total = self.total_cards_in_play.ok_or_else(|| {
            LiarsPokerError::InvalidConfiguration(
                "the total number of cards in play is required".to_string(),
            )
        })?;

        let cards_to_draw = total.checked_sub(self.known_cards.len()).ok_or_else(|| {
            LiarsPokerError::InvalidConfiguration(format!(
                "more known cards ({}) than total cards in play ({})",
                self.known_cards.len(),
                total
            ))
        })?;

        let remaining_deck = Deck::new().remove_known(&self.known_cards);
        if cards_to_draw > remaining_deck.len() {
            return Err(LiarsPokerError::InvalidConfiguration(format!(
                "can't draw {} cards, only {} are left in the deck",
                cards_to_draw,
                remaining_deck.len()
            )));
        }

        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(LiarsPokerError::InvalidConfiguration(format!(
                "threshold {} is outside [0, 1]",
                self.threshold
            )));
        }

        Ok(PresenceSimulation {
            known_cards: self.known_cards,
            remaining_deck,
            cards_to_draw,
            bid,
            threshold: self.threshold,
            samples: self.samples,
            evaluator: HandEvaluator::new(self.cache_capacity),
            rng: self.rng,
        })
    }
}

impl<R: Rng> Default for RngPresenceSimulationBuilder<R> {
    fn default() -> Self {
        Self {
            known_cards: vec![],
            total_cards_in_play: None,
            bid: None,
            threshold: DEFAULT_THRESHOLD,
            samples: DEFAULT_SAMPLES,
            cache_capacity: CacheCapacity::default(),
            rng: None,
        }
    }
}

/// The rng is ThreadRng.
pub type PresenceSimulationBuilder = RngPresenceSimulationBuilder<ThreadRng>;
