use core::fmt;
use serde::{Deserialize, Serialize};

/// The five ranks of the Schnapsen deck, ordered by card points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Jack = 0,
    Queen = 1,
    King = 2,
    Ten = 3,
    Ace = 4,
}

impl Rank {
    pub const ORDERED: [Rank; 5] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ten, Rank::Ace];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Rank::Jack),
            1 => Some(Rank::Queen),
            2 => Some(Rank::King),
            3 => Some(Rank::Ten),
            4 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Card points awarded to whoever wins a trick containing this rank.
    pub const fn points(self) -> u32 {
        match self {
            Rank::Jack => 2,
            Rank::Queen => 3,
            Rank::King => 4,
            Rank::Ten => 10,
            Rank::Ace => 11,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ten => "10",
            Rank::Ace => "A",
        };
        f.write_str(text)
    }
}
