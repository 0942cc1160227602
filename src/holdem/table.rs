use std::fmt;

use rand::Rng;

use crate::core::{Card, FlatDeck, Hand, OddsError};

use super::equity::{EquityResult, compute_equity};

/// Hole cards a player holds.
pub const HAND_SIZE: usize = 2;
/// Community cards on a full board.
pub const BOARD_SIZE: usize = 5;

/// Names for each board slot, in deal order.
const BOARD_LABELS: [&str; BOARD_SIZE] = ["Flop", "Flop", "Flop", "Turn", "River"];

/// How far the board has been dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    /// Fewer than three board cards.
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        };
        f.write_str(name)
    }
}

/// The cards a player knows about: their hand and the board.
///
/// A card can only ever be in one place. Every insert checks both the
/// hand and the board first, and neither can grow past its size.
///
/// ```
/// use holdem_odds::core::{Card, OddsError};
/// use holdem_odds::holdem::{Street, Table};
///
/// let mut table = Table::new();
/// table.add_to_hand("As".parse().unwrap()).unwrap();
/// table.add_to_hand("Kd".parse().unwrap()).unwrap();
///
/// let ace: Card = "As".parse().unwrap();
/// assert_eq!(Err(OddsError::DuplicateCard(ace)), table.add_to_board(ace));
/// assert_eq!(Street::Preflop, table.street());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    hand: Hand,
    board: Hand,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn board(&self) -> &Hand {
        &self.board
    }

    /// Is this card already in the hand or on the board?
    pub fn is_known(&self, c: &Card) -> bool {
        self.hand.contains(c) || self.board.contains(c)
    }

    fn check_unknown(&self, c: Card) -> Result<(), OddsError> {
        if self.is_known(&c) {
            return Err(OddsError::DuplicateCard(c));
        }
        Ok(())
    }

    pub fn add_to_hand(&mut self, c: Card) -> Result<(), OddsError> {
        self.check_unknown(c)?;
        if self.hand.len() >= HAND_SIZE {
            return Err(OddsError::HandFull);
        }
        self.hand.push(c)
    }

    pub fn add_to_board(&mut self, c: Card) -> Result<(), OddsError> {
        self.check_unknown(c)?;
        if self.board.len() >= BOARD_SIZE {
            return Err(OddsError::BoardFull);
        }
        self.board.push(c)
    }

    pub fn remove_from_hand(&mut self, index: usize) -> Option<Card> {
        self.hand.remove(index)
    }

    pub fn remove_from_board(&mut self, index: usize) -> Option<Card> {
        self.board.remove(index)
    }

    pub fn clear(&mut self) {
        self.hand.clear();
        self.board.clear();
    }

    /// Both hole cards are in, so equity can be computed.
    pub fn is_ready(&self) -> bool {
        self.hand.len() == HAND_SIZE
    }

    pub fn street(&self) -> Street {
        match self.board.len() {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// The label for a board slot, `None` past the river.
    pub fn board_label(index: usize) -> Option<&'static str> {
        BOARD_LABELS.get(index).copied()
    }

    /// Hand then board, in the order they were added.
    pub fn known_cards(&self) -> Vec<Card> {
        self.hand.iter().chain(self.board.iter()).copied().collect()
    }

    /// Every card that hasn't been seen yet.
    pub fn remaining_deck(&self) -> FlatDeck {
        FlatDeck::remaining(&self.known_cards())
    }

    /// Estimate this hand's equity on this board.
    pub fn equity<R: Rng>(&self, trials: usize, rng: R) -> Result<EquityResult, OddsError> {
        compute_equity(&self.hand, &self.board, trials, rng)
    }
}

impl TryFrom<(&str, &str)> for Table {
    type Error = OddsError;

    /// Build a table from a hand string and a board string, e.g.
    /// `("AsKd", "Qh7c2s")`.
    fn try_from((hand, board): (&str, &str)) -> Result<Self, Self::Error> {
        let mut table = Table::new();
        for c in Hand::new_from_str(hand)?.iter() {
            table.add_to_hand(*c)?;
        }
        for c in Hand::new_from_str(board)?.iter() {
            table.add_to_board(*c)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_hand_is_bounded() {
        let mut table = Table::new();
        table.add_to_hand(Card::new(Value::Ace, Suit::Spade)).unwrap();
        table.add_to_hand(Card::new(Value::King, Suit::Spade)).unwrap();
        assert!(table.is_ready());
        assert_eq!(
            Err(OddsError::HandFull),
            table.add_to_hand(Card::new(Value::Queen, Suit::Spade))
        );
        assert_eq!(2, table.hand().len());
    }

    #[test]
    fn test_board_is_bounded() {
        let mut table = Table::try_from(("", "2c3c4c5c6c")).unwrap();
        assert_eq!(Street::River, table.street());
        assert_eq!(
            Err(OddsError::BoardFull),
            table.add_to_board(Card::new(Value::Seven, Suit::Club))
        );
    }

    #[test]
    fn test_hand_and_board_disjoint() {
        let mut table = Table::try_from(("AsKs", "Qs")).unwrap();
        let king = Card::new(Value::King, Suit::Spade);
        let queen = Card::new(Value::Queen, Suit::Spade);
        assert_eq!(Err(OddsError::DuplicateCard(king)), table.add_to_board(king));
        assert_eq!(Err(OddsError::DuplicateCard(queen)), table.add_to_hand(queen));
        assert_eq!(
            Err(OddsError::DuplicateCard(king)),
            Table::try_from(("AsKs", "Ks")).map(|_| ())
        );
    }

    #[test]
    fn test_remove_and_reuse() {
        let mut table = Table::try_from(("AsKs", "Qs")).unwrap();
        let king = Card::new(Value::King, Suit::Spade);
        assert_eq!(Some(king), table.remove_from_hand(1));
        assert!(!table.is_ready());
        table.add_to_board(king).unwrap();
        assert_eq!(None, table.remove_from_board(5));
        assert_eq!(2, table.board().len());
        table.clear();
        assert!(table.known_cards().is_empty());
    }

    #[test]
    fn test_streets_and_labels() {
        let mut table = Table::try_from(("AsKs", "")).unwrap();
        assert_eq!(Street::Preflop, table.street());
        for (i, id) in ["2d", "3d", "4d", "5d", "6d"].iter().enumerate() {
            assert_eq!(Table::board_label(i), Some(BOARD_LABELS[i]));
            table.add_to_board(id.parse().unwrap()).unwrap();
        }
        assert_eq!(Street::River, table.street());
        assert_eq!(Some("Turn"), Table::board_label(3));
        assert_eq!(None, Table::board_label(5));
        assert_eq!("River", table.street().to_string());
    }

    #[test]
    fn test_remaining_deck() {
        let table = Table::try_from(("AsKs", "Qs7d2c")).unwrap();
        let deck = table.remaining_deck();
        assert_eq!(47, deck.len());
        assert!(deck.iter().all(|c| !table.is_known(c)));
    }

    #[test_log::test]
    fn test_table_equity() {
        let table = Table::try_from(("AsKs", "QsJsTs")).unwrap();
        let result = table.equity(200, StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(100.0, result.win_pct);
        assert_eq!("Royal Flush", result.current_hand_name());
    }
}
