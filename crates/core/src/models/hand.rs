use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::card::{Card, Rank};
use crate::errors::CoreError;

/// Whether a starting hand is a pocket pair, suited, or offsuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandShape {
    Pair,
    Suited,
    Offsuit,
}

/// Canonical starting-hand label: "AA", "AKs", "T9o".
///
/// The higher rank always comes first. Strategy tables are keyed on this
/// exact form, so every label must be built through [`HandLabel::from_cards`]
/// or parsed from canonical text. Serialized as that text, so decoding
/// goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HandLabel {
    high: Rank,
    low: Rank,
    shape: HandShape,
}

impl HandLabel {
    /// Normalize two hole cards into their label. The order of the cards
    /// does not matter. Two identical cards are rejected.
    pub fn from_cards(card1: Card, card2: Card) -> Result<Self, CoreError> {
        if card1 == card2 {
            return Err(CoreError::DuplicateCard(card1.to_string()));
        }

        let (high, low) = if card1.rank >= card2.rank {
            (card1, card2)
        } else {
            (card2, card1)
        };

        let shape = if high.rank == low.rank {
            HandShape::Pair
        } else if high.suit == low.suit {
            HandShape::Suited
        } else {
            HandShape::Offsuit
        };

        Ok(Self {
            high: high.rank,
            low: low.rank,
            shape,
        })
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn shape(&self) -> HandShape {
        self.shape
    }

    pub fn is_pair(&self) -> bool {
        self.shape == HandShape::Pair
    }

    pub fn is_suited(&self) -> bool {
        self.shape == HandShape::Suited
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            HandShape::Pair => write!(f, "{}{}", self.high, self.low),
            HandShape::Suited => write!(f, "{}{}s", self.high, self.low),
            HandShape::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

/// Parses canonical labels only: "AA", "AKs", "AKo".
/// Non-canonical forms ("KAs", "AAs", "AK") are rejected.
impl FromStr for HandLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let invalid = || CoreError::ValidationError(format!("'{s}' is not a canonical hand label"));

        if chars.len() < 2 || chars.len() > 3 {
            return Err(invalid());
        }

        let high = Rank::from_symbol(chars[0]).ok_or_else(invalid)?;
        let low = Rank::from_symbol(chars[1]).ok_or_else(invalid)?;

        let shape = match (chars.get(2), high.cmp(&low)) {
            (None, std::cmp::Ordering::Equal) => HandShape::Pair,
            (Some('s'), std::cmp::Ordering::Greater) => HandShape::Suited,
            (Some('o'), std::cmp::Ordering::Greater) => HandShape::Offsuit,
            _ => return Err(invalid()),
        };

        Ok(Self { high, low, shape })
    }
}

impl TryFrom<String> for HandLabel {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HandLabel> for String {
    fn from(label: HandLabel) -> Self {
        label.to_string()
    }
}
