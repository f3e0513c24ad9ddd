use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Card rank. Declaration order is the strength order, so the derived
/// `Ord` gives A > K > Q > J > T > 9 > … > 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, highest first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Single-character symbol used in hand labels ("A", "K", …, "T", "9", …, "2").
    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Parse a rank symbol (case-insensitive). The ten is always `T`, never "10".
    pub fn from_symbol(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single playing card. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a card from separately selected rank and suit symbols,
    /// e.g. `("A", "h")` from two dropdowns.
    pub fn from_parts(rank: &str, suit: &str) -> Result<Self, CoreError> {
        let rank_sym = single_char(rank)
            .and_then(Rank::from_symbol)
            .ok_or_else(|| CoreError::InvalidCard(format!("unknown rank '{rank}'")))?;
        let suit_sym = single_char(suit)
            .and_then(Suit::from_symbol)
            .ok_or_else(|| CoreError::InvalidCard(format!("unknown suit '{suit}'")))?;
        Ok(Self::new(rank_sym, suit_sym))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(c)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses two-character notation like "Ah", "Td", "2c".
impl FromStr for Card {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() != 2 {
            return Err(CoreError::InvalidCard(format!(
                "'{s}' must be a rank followed by a suit (e.g. Ah, Td)"
            )));
        }
        let rank = Rank::from_symbol(chars[0])
            .ok_or_else(|| CoreError::InvalidCard(format!("unknown rank '{}' in '{s}'", chars[0])))?;
        let suit = Suit::from_symbol(chars[1])
            .ok_or_else(|| CoreError::InvalidCard(format!("unknown suit '{}' in '{s}'", chars[1])))?;
        Ok(Self::new(rank, suit))
    }
}
