use crate::core::card::{Card, Suit, Value};
use std::collections::HashSet;
use std::collections::hash_set::{IntoIter, Iter};

/// Deck struct that can tell quickly if a card is in the deck
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    /// Used to figure out quickly
    /// if this card is in the deck.
    cards: HashSet<Card>,
}

impl Deck {
    /// Create a new empty deck.
    pub fn new() -> Self {
        Self {
            cards: HashSet::new(),
        }
    }
    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }
    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.cards.remove(c)
    }
    /// Add a card to the deck.
    /// Returns false if the card was already there.
    pub fn insert(&mut self, c: Card) -> bool {
        self.cards.insert(c)
    }
    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use holdem_odds::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        Suit::suits()
            .into_iter()
            .flat_map(|suit| Value::values().into_iter().map(move |value| Card { value, suit }))
            .collect()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a Card> for Deck {
    fn from_iter<T: IntoIterator<Item = &'a Card>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::*;

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card {
            value: Value::Eight,
            suit: Suit::Heart,
        }));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::default();
        let c = Card {
            value: Value::Ace,
            suit: Suit::Heart,
        };
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_insert_twice() {
        let mut d = Deck::new();
        let c = Card::new(Value::Two, Suit::Club);
        assert!(d.is_empty());
        assert!(d.insert(c));
        assert!(!d.insert(c));
        assert_eq!(1, d.len());
    }

    #[test]
    fn test_collect_from_refs() {
        let cards = [
            Card::new(Value::King, Suit::Spade),
            Card::new(Value::King, Suit::Heart),
        ];
        let d: Deck = cards.iter().collect();
        assert_eq!(2, d.len());
        assert!(cards.iter().all(|c| d.contains(c)));
    }
}
