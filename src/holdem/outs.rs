use tracing::event;

use crate::core::{Card, Deck, OddsError, evaluate};

/// How many of the improving cards are kept as examples.
pub const MAX_SAMPLE_OUTS: usize = 5;

/// Cards left in the deck that would move the hand up a category.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutsResult {
    /// Number of cards that improve the category.
    pub count: usize,
    /// The first few improving cards in deck order.
    pub sample: Vec<Card>,
    /// Chance of hitting at least one out by the river, 0 to 100.
    pub improvement_pct: f64,
}

impl OutsResult {
    /// `improvement_pct` rounded to one decimal place.
    pub fn rounded_pct(&self) -> f64 {
        (self.improvement_pct * 10.0).round() / 10.0
    }
}

/// Count the outs for the known cards (hole cards plus a flop or turn).
///
/// A card from `remaining` is an out only when adding it gives a better
/// score *and* a better category than the current best hand; a better
/// kicker inside the same category doesn't count.
///
/// With two cards to come the chance of improving is
/// `1 - ((n - outs) / n)^2`, treating the turn and river as independent
/// draws. With one card to come it is `outs / n`.
///
/// ```
/// use holdem_odds::core::{FlatDeck, Hand};
/// use holdem_odds::holdem::compute_outs;
///
/// // Four hearts on the turn: nine hearts left make the flush.
/// let known = Hand::new_from_str("AhKh7h2hJc9s").unwrap();
/// let outs = compute_outs(&known, &FlatDeck::remaining(&known)[..]).unwrap();
/// assert!(outs.count >= 9);
/// ```
pub fn compute_outs(known: &[Card], remaining: &[Card]) -> Result<OutsResult, OddsError> {
    let cards_to_come = match known.len() {
        5 => 2,
        6 => 1,
        n => return Err(OddsError::InvalidOutsCardCount(n)),
    };
    let current = evaluate(known)?;

    let known_set: Deck = known.iter().collect();
    if let Some(c) = remaining.iter().find(|c| known_set.contains(c)) {
        return Err(OddsError::DuplicateCard(*c));
    }

    let mut result = OutsResult::default();
    if remaining.is_empty() {
        return Ok(result);
    }

    let mut hypothetical: Vec<Card> = Vec::with_capacity(known.len() + 1);
    hypothetical.extend_from_slice(known);
    hypothetical.push(remaining[0]);
    let last = hypothetical.len() - 1;

    for card in remaining {
        hypothetical[last] = *card;
        let improved = evaluate(&hypothetical)?;
        if improved.score > current.score && improved.category > current.category {
            event!(tracing::Level::TRACE, out = %card, category = %improved.category, "Found out");
            result.count += 1;
            if result.sample.len() < MAX_SAMPLE_OUTS {
                result.sample.push(*card);
            }
        }
    }

    let n = remaining.len() as f64;
    let outs = result.count as f64;
    result.improvement_pct = if result.count == 0 {
        0.0
    } else if cards_to_come == 2 {
        (1.0 - ((n - outs) / n).powi(2)) * 100.0
    } else {
        outs / n * 100.0
    };

    Ok(result)
}
