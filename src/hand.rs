use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand holds exactly 5 cards, got {0}")]
    WrongCardCount(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly five pairwise-distinct cards, held sorted ascending by rank.
///
/// The ascending order is established once at construction; straight
/// detection and the positional tie-break weighting both rely on it.
///
/// ```
/// use showdown::hand::Hand;
///
/// let hand: Hand = "KD 2H 9C 3D 5S".parse().unwrap();
/// assert_eq!(hand.to_string(), "2H 3D 5S 9C KD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Self::from_slice(&cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != HAND_SIZE {
            return Err(HandError::WrongCardCount(slice.len()));
        }
        for (i, c) in slice.iter().enumerate() {
            if slice[i + 1..].contains(c) {
                return Err(HandError::DuplicateCard(*c));
            }
        }
        let mut cards = [slice[0], slice[1], slice[2], slice[3], slice[4]];
        cards.sort_by_key(|c| c.rank());
        Ok(Self { cards })
    }

    /// The five cards in ascending rank order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The highest card (last in canonical order).
    pub fn highest(&self) -> Card {
        self.cards[HAND_SIZE - 1]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_new(cards)
    }
}
