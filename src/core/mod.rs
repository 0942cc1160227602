//! This is the core module. It exports the cards, decks and the
//! hand ranking code. Nothing in here knows about simulation.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// The error type shared by the whole crate.
mod error;
pub use self::error::OddsError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Ordered deck that can be shuffled and dealt from.
mod flat_deck;
pub use self::flat_deck::FlatDeck;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{BAND_SIZE, Category, Rankable, ScoredHand, evaluate, score_five};
