use std::ops::Deref;
use std::slice::Iter;

use super::{Card, Deck, OddsError};

/// An ordered collection of distinct cards.
///
/// Insertion order is kept so that cards display in the order they
/// were added. Uniqueness is checked on every insert.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(7),
        }
    }

    /// Build a hand from cards, failing on the first repeated card.
    pub fn new_with_cards(cards: Vec<Card>) -> Result<Self, OddsError> {
        let mut hand = Self::new();
        for c in cards {
            hand.push(c)?;
        }
        Ok(hand)
    }

    /// Parse a run of card identifiers such as `AsKd` or `10h9h`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{Card, Hand, OddsError, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("AdKd").unwrap();
    /// assert_eq!(2, hand.len());
    /// assert_eq!(Card::new(Value::Ace, Suit::Diamond), hand[0]);
    ///
    /// let dup = Hand::new_from_str("AdAd");
    /// assert!(matches!(dup, Err(OddsError::DuplicateCard(_))));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, OddsError> {
        let mut chars = hand_string.chars();
        let mut hand = Self::new();

        // Keep looping until we run out of characters
        while let Some(c) = Card::parse_next(&mut chars)? {
            hand.push(c)?;
        }

        Ok(hand)
    }

    /// Given a card, is it in the current hand?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Add a card to the end of the hand.
    pub fn push(&mut self, c: Card) -> Result<(), OddsError> {
        if self.contains(&c) {
            return Err(OddsError::DuplicateCard(c));
        }
        self.cards.push(c);
        Ok(())
    }

    /// Remove the card at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Drop every card past the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// The set of cards in this hand, for fast membership tests.
    pub fn to_deck(&self) -> Deck {
        self.cards.iter().collect()
    }
}

impl Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl From<Hand> for Vec<Card> {
    fn from(val: Hand) -> Self {
        val.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_push() {
        let mut hand = Hand::new();
        let c = Card::new(Value::Three, Suit::Spade);
        assert!(hand.push(c).is_ok());
        assert!(hand.contains(&c));
        assert_eq!(1, hand.len());
        assert_eq!(Err(OddsError::DuplicateCard(c)), hand.push(c));
        assert_eq!(1, hand.len());
    }

    #[test]
    fn test_is_empty() {
        let mut hand = Hand::new_from_str("2s").unwrap();
        assert!(!hand.is_empty());
        hand.clear();
        assert!(hand.is_empty());
    }

    #[test]
    fn test_keeps_order() {
        let hand = Hand::new_from_str("9c2dAh").unwrap();
        let ids: Vec<String> = hand.iter().map(|c| c.to_string()).collect();
        assert_eq!(vec!["9c", "2d", "Ah"], ids);
    }

    #[test]
    fn test_remove() {
        let mut hand = Hand::new_from_str("9c2dAh").unwrap();
        assert_eq!(Some(Card::new(Value::Two, Suit::Diamond)), hand.remove(1));
        assert_eq!(None, hand.remove(2));
        assert_eq!(2, hand.len());
        assert_eq!(Card::new(Value::Ace, Suit::Heart), hand[1]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(OddsError::TooFewChars), Hand::new_from_str("AsK"));
        assert_eq!(Err(OddsError::UnexpectedSuitChar), Hand::new_from_str("AsKx"));
        assert!(Hand::new_from_str("").unwrap().is_empty());
    }

    #[test]
    fn test_new_with_cards_duplicate() {
        let c = Card::new(Value::Jack, Suit::Club);
        assert_eq!(
            Err(OddsError::DuplicateCard(c)),
            Hand::new_with_cards(vec![c, c])
        );
    }
}
