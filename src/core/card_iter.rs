use crate::core::card::Card;

/// Lazily walks every `num_cards` sized subset of a slice of cards.
///
/// Subsets come out in lexicographic order of their positions, so for
/// seven cards the first is positions `0..5` and the last `2..7`.
/// Each iterator is independent; call `CardIter::new` again to restart.
///
/// ```
/// use holdem_odds::core::{CardIter, Hand};
///
/// let hand = Hand::new_from_str("AsKsQsJsTs9s8s").unwrap();
/// assert_eq!(21, CardIter::new(&hand, 5).count());
/// ```
#[derive(Debug, Clone)]
pub struct CardIter<'a> {
    // All the possible cards that can be picked
    possible_cards: &'a [Card],

    // Positions into possible_cards making up the current subset.
    idx: Vec<usize>,

    // size of card sets requested.
    num_cards: usize,

    started: bool,
    finished: bool,
}

impl<'a> CardIter<'a> {
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            num_cards,
            started: false,
            finished: num_cards == 0 || num_cards > possible_cards.len(),
        }
    }

    /// Move `idx` to the next subset. Returns false when there are none left.
    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        let k = self.num_cards;
        // Find the right most position that can still move forward and
        // leave room for the positions after it.
        let Some(level) = (0..k).rev().find(|&i| self.idx[i] < n - k + i) else {
            return false;
        };
        self.idx[level] += 1;
        for i in level + 1..k {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.finished {
            return None;
        }
        if self.started && !self.advance() {
            self.finished = true;
            return None;
        }
        self.started = true;

        Some(self.idx.iter().map(|i| self.possible_cards[*i]).collect())
    }
}
