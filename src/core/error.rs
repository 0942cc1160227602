use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// holdem_odds library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OddsError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} is already known")]
    DuplicateCard(Card),
    #[error("At least 5 cards are needed to rank a hand, got {0}")]
    TooFewCards(usize),
    #[error("At most 7 cards can be ranked, got {0}")]
    TooManyCards(usize),
    #[error("A hand must have exactly 2 hole cards, got {0}")]
    InvalidHoleCards(usize),
    #[error("The hand already holds 2 cards")]
    HandFull,
    #[error("The board can't hold more than 5 cards")]
    BoardFull,
    #[error("Outs need 5 or 6 known cards, got {0}")]
    InvalidOutsCardCount(usize),
    #[error("A simulation needs at least one trial")]
    NoTrials,
    #[error("Simulation cancelled after {completed} trials")]
    Cancelled { completed: usize },
}
