use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of distinct cards in the deck.
pub const DECK_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Stable suit-major identifier in `0..DECK_SIZE`.
    pub const fn to_id(self) -> u8 {
        (self.suit.index() * Rank::ORDERED.len() + self.rank.index()) as u8
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        let id = id as usize;
        let suit = match Suit::from_index(id / Rank::ORDERED.len()) {
            Some(suit) => suit,
            None => return None,
        };
        match Rank::from_index(id % Rank::ORDERED.len()) {
            Some(rank) => Some(Self { rank, suit }),
            None => None,
        }
    }

    pub const fn points(self) -> u32 {
        self.rank.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
