use std::fmt;
use std::str::{Chars, FromStr};

use super::OddsError;

/// Card rank or value.
/// The discriminant is the face value used for scoring,
/// so an ace is 14 and a deuce is 2.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
    /// A
    Ace = 14,
}

/// Every value from the ace down to the deuce.
/// This is the order cards appear in within a suit of the deck.
const VALUES: [Value; 13] = [
    Value::Ace,
    Value::King,
    Value::Queen,
    Value::Jack,
    Value::Ten,
    Value::Nine,
    Value::Eight,
    Value::Seven,
    Value::Six,
    Value::Five,
    Value::Four,
    Value::Three,
    Value::Two,
];

impl Value {
    /// Get all of the `Value`'s that are possible, highest first.
    ///
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert_eq!(Value::Ace, Value::values()[0]);
    /// assert_eq!(Value::Two, Value::values()[12]);
    /// ```
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// The integer face value, 14 for an ace down to 2.
    pub const fn face(self) -> u32 {
        self as u32
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the `Suit`'s in deck order. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse either the ascii letter or the card glyph.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            's' | 'S' | '♠' => Some(Suit::Spade),
            'h' | 'H' | '♥' => Some(Suit::Heart),
            'd' | 'D' | '♦' => Some(Suit::Diamond),
            'c' | 'C' | '♣' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// The `Display` form (`As`, `Td`, `2c`) is the card's identifier.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Read a single card from the front of `chars`.
    ///
    /// Returns `Ok(None)` when there is nothing left to read.
    pub(crate) fn parse_next(chars: &mut Chars<'_>) -> Result<Option<Card>, OddsError> {
        let Some(vc) = chars.next() else {
            return Ok(None);
        };
        let value = if vc == '1' {
            // The only value spelled with two characters is 10
            match chars.next() {
                Some('0') => Value::Ten,
                _ => return Err(OddsError::UnexpectedValueChar),
            }
        } else {
            Value::from_char(vc).ok_or(OddsError::UnexpectedValueChar)?
        };
        let suit = chars
            .next()
            .ok_or(OddsError::TooFewChars)
            .and_then(|sc| Suit::from_char(sc).ok_or(OddsError::UnexpectedSuitChar))?;
        Ok(Some(Card { value, suit }))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = OddsError;

    /// Parse a card identifier like `As`, `10h` or `Q♦`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let card = Card::parse_next(&mut chars)?.ok_or(OddsError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(OddsError::UnparsedCharsRemaining);
        }
        Ok(card)
    }
}

impl TryFrom<&str> for Card {
    type Error = OddsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
