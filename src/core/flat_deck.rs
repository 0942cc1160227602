use crate::core::card::{Card, Suit, Value};
use crate::core::deck::Deck;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};
use std::slice::Iter;

use rand::Rng;

/// `FlatDeck` is an ordered deck of cards that allows easy
/// indexing into the cards. It does not provide
/// contains methods, use `Deck` for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// The full 52 card deck in canonical order.
    /// Spades, hearts, diamonds then clubs, each from the ace down.
    ///
    /// ```
    /// use holdem_odds::core::{Card, FlatDeck, Suit, Value};
    ///
    /// let deck = FlatDeck::full();
    /// assert_eq!(52, deck.len());
    /// assert_eq!(Card::new(Value::Ace, Suit::Spade), deck[0]);
    /// assert_eq!(Card::new(Value::Two, Suit::Club), deck[51]);
    /// ```
    pub fn full() -> Self {
        Self::remaining(&[])
    }

    /// Every card of the full deck that isn't in `known`, in canonical order.
    ///
    /// If all 52 cards are known the result is simply empty.
    ///
    /// ```
    /// use holdem_odds::core::{FlatDeck, Hand};
    ///
    /// let known = Hand::new_from_str("AsKsQd").unwrap();
    /// let deck = FlatDeck::remaining(&known);
    /// assert_eq!(49, deck.len());
    /// assert!(deck.iter().all(|c| !known.contains(c)));
    /// ```
    pub fn remaining(known: &[Card]) -> Self {
        let known: Deck = known.iter().collect();
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|suit| Value::values().into_iter().map(move |value| Card { value, suit }))
            .filter(|c| !known.contains(c))
            .collect();
        Self { cards }
    }

    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// Add a card to the deck.
    /// This does not check if the card is already in the deck.
    /// It will just add it to the end of the deck.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Randomly shuffle the flat deck in place.
    ///
    /// Fisher-Yates: walk from the last position to the second, swapping
    /// each position with a uniformly chosen one at or below it.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// A shuffled copy of this deck. `self` is left untouched.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> FlatDeck {
        let mut copy = self.clone();
        copy.shuffle(rng);
        copy
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Allow creating a flat deck from a Deck
impl From<Deck> for FlatDeck {
    /// Flatten this deck, consuming it to produce a `FlatDeck` that's
    /// easier to get random access to.
    fn from(value: Deck) -> Self {
        // We sort the cards so that the same input
        // cards always result in the same starting flat deck
        let mut cards: Vec<Card> = value.into_iter().collect();
        cards.sort();
        Self { cards }
    }
}

impl<'a> IntoIterator for &'a FlatDeck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_deck_from() {
        let fd: FlatDeck = Deck::default().into();
        assert_eq!(52, fd.len());
    }

    #[test]
    fn test_full_is_unique() {
        let fd = FlatDeck::full();
        let set: Deck = fd.iter().collect();
        assert_eq!(52, set.len());
    }

    #[test]
    fn test_remaining_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        for num_known in 0..=7 {
            let known: Vec<Card> = FlatDeck::full().shuffled(&mut rng)[..num_known].to_vec();
            let remaining = FlatDeck::remaining(&known);
            assert_eq!(52 - num_known, remaining.len());
            for c in &remaining {
                assert!(!known.contains(c));
            }
        }
    }

    #[test]
    fn test_remaining_exhausted() {
        let all = FlatDeck::full();
        let remaining = FlatDeck::remaining(&all[..]);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let c = Card {
            value: Value::Nine,
            suit: Suit::Heart,
        };
        let v = vec![c];

        let mut flat_deck: FlatDeck = v.into();

        assert_eq!(1, flat_deck.len());
        assert_eq!(Some(c), flat_deck.deal());
        assert!(flat_deck.is_empty());
    }

    #[test]
    fn test_shuffle_rng() {
        let fd = FlatDeck::full();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        let one = fd.shuffled(&mut rng_one);
        let two = fd.shuffled(&mut rng_two);

        assert_eq!(one, two);
        // The source deck is left as it was.
        assert_eq!(FlatDeck::full(), fd);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let fd = FlatDeck::full();
        let mut rng = StdRng::seed_from_u64(99);
        let shuffled = fd.shuffled(&mut rng);
        assert_ne!(fd, shuffled);

        let mut sorted: Vec<Card> = shuffled[..].to_vec();
        sorted.sort();
        let mut expected: Vec<Card> = fd[..].to_vec();
        expected.sort();
        assert_eq!(expected, sorted);
    }

    #[test]
    fn test_repeated_shuffles_differ() {
        let fd = FlatDeck::full();
        let mut rng = StdRng::seed_from_u64(3);
        let first = fd.shuffled(&mut rng);
        let second = fd.shuffled(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_index() {
        let mut fd: FlatDeck = Deck::new().into();
        let c = Card::new(Value::Nine, Suit::Heart);
        let c2 = Card::new(Value::Ten, Suit::Heart);
        fd.push(c);
        fd.push(c2);
        assert_eq!(c, fd[0]);
        assert_eq!(c2, fd[1]);
        assert_eq!(&[c, c2], &fd[0..2]);
        assert_eq!(&[c2], &fd[1..]);
    }
}
