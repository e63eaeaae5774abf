use thiserror::Error;

/// This is the core error type for the
/// liars_poker library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiarsPokerError {
    #[error("Card text must look like '<rank> of <suit>', got '{0}'")]
    InvalidCardFormat(String),
    #[error("Unable to parse value '{0}'")]
    UnexpectedValue(String),
    #[error("Unable to parse suit '{0}'")]
    UnexpectedSuit(String),
    #[error("Unknown hand category '{0}'")]
    UnknownHandCategory(String),
    #[error("Bid '{text}' needs {needed} rank(s) for {category}")]
    MissingBidRank {
        text: String,
        category: String,
        needed: usize,
    },
    #[error("Invalid simulation configuration: {0}")]
    InvalidConfiguration(String),
}

impl LiarsPokerError {
    /// Is this one of the text parsing failures?
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, LiarsPokerError::InvalidConfiguration(_))
    }
}
