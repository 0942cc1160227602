use std::fmt;

use crate::core::card::Card;
use crate::core::card_iter::CardIter;
use crate::core::hand::Hand;
use crate::core::{Deck, OddsError};

/// Width of a category band. A score divided by this is its `Category`.
pub const BAND_SIZE: u32 = 1_000_000;

/// Ranks are at most 14 so a base 15 positional number keeps every rank
/// distinct, and five digits (15^5 = 759,375) stay inside one band.
const RADIX: u32 = 15;

/// The ten hand categories, lowest first.
/// The discriminant is the category's band.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// The lowest rank.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    OnePair = 1,
    /// Two diffent pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all of the same suit.
    StraightFlush = 8,
    /// Ten through ace all of the same suit.
    RoyalFlush = 9,
}

impl Category {
    /// The band index, 0 for high card up to 9 for a royal flush.
    pub const fn band(self) -> u32 {
        self as u32
    }

    /// The lowest score any hand of this category can have.
    pub const fn base_score(self) -> u32 {
        self.band() * BAND_SIZE
    }

    /// Which category a score falls in.
    ///
    /// ```
    /// use holdem_odds::core::Category;
    ///
    /// assert_eq!(Category::HighCard, Category::from_score(12_345));
    /// assert_eq!(Category::Flush, Category::from_score(5_000_001));
    /// assert_eq!(Category::RoyalFlush, Category::from_score(9_000_014));
    /// ```
    pub const fn from_score(score: u32) -> Category {
        match score / BAND_SIZE {
            0 => Category::HighCard,
            1 => Category::OnePair,
            2 => Category::TwoPair,
            3 => Category::ThreeOfAKind,
            4 => Category::Straight,
            5 => Category::Flush,
            6 => Category::FullHouse,
            7 => Category::FourOfAKind,
            8 => Category::StraightFlush,
            _ => Category::RoyalFlush,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of ranking some cards.
///
/// Compare hands by `score`: higher always wins and equal scores are an
/// exact tie, whichever cards made them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredHand {
    pub score: u32,
    /// The five cards that make up the hand, in input order.
    pub best_five: [Card; 5],
    pub category: Category,
}

impl ScoredHand {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

/// Fold ranks into one positional number, most significant first.
fn positional(ranks: &[u32]) -> u32 {
    ranks.iter().fold(0, |acc, r| acc * RADIX + r)
}

/// If the descending ranks form a straight return its high card.
/// The wheel (A-5-4-3-2) plays as five high.
fn straight_high(ranks: &[u32; 5]) -> Option<u32> {
    if ranks.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(ranks[0])
    } else if *ranks == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

/// Score exactly five cards.
///
/// This is a pure function of the cards. The caller is responsible for
/// making sure the five cards are distinct.
pub fn score_five(cards: &[Card; 5]) -> u32 {
    let mut ranks = cards.map(|c| c.value.face());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&ranks);

    // Tally how many times each rank shows up, then order the distinct
    // ranks by count and then by rank. This puts the ranks that define
    // the category first and the kickers after them.
    let mut counts = [0u8; 15];
    for r in ranks {
        counts[r as usize] += 1;
    }
    let mut groups: Vec<(u8, u32)> = (2..=14u32)
        .rev()
        .filter(|r| counts[*r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let ordered: Vec<u32> = groups.iter().map(|g| g.1).collect();

    match (is_flush, straight, groups[0].0, groups.get(1).map(|g| g.0)) {
        (true, Some(14), _, _) => Category::RoyalFlush.base_score() + 14,
        (true, Some(high), _, _) => Category::StraightFlush.base_score() + high,
        (_, _, 4, _) => Category::FourOfAKind.base_score() + positional(&ordered),
        (_, _, 3, Some(2)) => Category::FullHouse.base_score() + positional(&ordered),
        (true, None, _, _) => Category::Flush.base_score() + positional(&ranks),
        (false, Some(high), _, _) => Category::Straight.base_score() + high,
        (_, _, 3, _) => Category::ThreeOfAKind.base_score() + positional(&ordered),
        (_, _, 2, Some(2)) => Category::TwoPair.base_score() + positional(&ordered),
        (_, _, 2, _) => Category::OnePair.base_score() + positional(&ordered),
        _ => positional(&ranks),
    }
}

/// Find the best five card hand in 5 to 7 distinct cards.
///
/// Every five card subset is scored and the highest kept. When several
/// subsets tie for the best score the first one found is returned.
///
/// ```
/// use holdem_odds::core::{Category, Hand, evaluate};
///
/// let cards = Hand::new_from_str("AsKsQsJsTs2d3c").unwrap();
/// let best = evaluate(&cards).unwrap();
/// assert_eq!(Category::RoyalFlush, best.category);
/// assert_eq!("Royal Flush", best.name());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<ScoredHand, OddsError> {
    if cards.len() < 5 {
        return Err(OddsError::TooFewCards(cards.len()));
    }
    if cards.len() > 7 {
        return Err(OddsError::TooManyCards(cards.len()));
    }
    let mut seen = Deck::new();
    for c in cards {
        if !seen.insert(*c) {
            return Err(OddsError::DuplicateCard(*c));
        }
    }

    let mut best: Option<([Card; 5], u32)> = None;
    for subset in CardIter::new(cards, 5) {
        let five: [Card; 5] = [subset[0], subset[1], subset[2], subset[3], subset[4]];
        let score = score_five(&five);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((five, score));
        }
    }

    // At least five cards guarantees one subset.
    let (best_five, score) = best.ok_or(OddsError::TooFewCards(cards.len()))?;
    Ok(ScoredHand {
        score,
        best_five,
        category: Category::from_score(score),
    })
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank the best five card hand. It doesn't do any caching so it's left
    /// up to the user to understand that duplicate work will be done if this
    /// is called more than once.
    fn rank(&self) -> Result<ScoredHand, OddsError>;
}

impl Rankable for [Card] {
    fn rank(&self) -> Result<ScoredHand, OddsError> {
        evaluate(self)
    }
}

impl Rankable for Hand {
    fn rank(&self) -> Result<ScoredHand, OddsError> {
        evaluate(self)
    }
}
