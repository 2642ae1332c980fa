use crate::error::GameError;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

/// Playing a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegularMove {
    pub card: Card,
}

impl RegularMove {
    pub const fn new(card: Card) -> Self {
        Self { card }
    }

    pub fn from_cards(cards: &[Card]) -> Vec<Move> {
        cards
            .iter()
            .map(|card| Move::Regular(RegularMove::new(*card)))
            .collect()
    }
}

/// Declaring queen and king of one suit. The queen is the card actually played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marriage {
    queen: Card,
    king: Card,
}

impl Marriage {
    pub fn new(queen: Card, king: Card) -> Result<Self, GameError> {
        if queen.rank != Rank::Queen || king.rank != Rank::King {
            return Err(GameError::invalid_state(format!(
                "a marriage needs a queen and a king, got {queen} and {king}"
            )));
        }
        if queen.suit != king.suit {
            return Err(GameError::invalid_state(format!(
                "marriage cards must share a suit, got {queen} and {king}"
            )));
        }
        Ok(Self { queen, king })
    }

    pub fn queen(&self) -> Card {
        self.queen
    }

    pub fn king(&self) -> Card {
        self.king
    }

    pub fn suit(&self) -> Suit {
        self.queen.suit
    }

    pub fn as_regular_move(&self) -> RegularMove {
        RegularMove::new(self.queen)
    }
}

/// Swapping the trump jack for the face-up trump card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrumpExchange {
    jack: Card,
}

impl TrumpExchange {
    pub fn new(jack: Card) -> Result<Self, GameError> {
        if jack.rank != Rank::Jack {
            return Err(GameError::invalid_state(format!(
                "a trump exchange needs a jack, got {jack}"
            )));
        }
        Ok(Self { jack })
    }

    pub fn jack(&self) -> Card {
        self.jack
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Regular(RegularMove),
    Marriage(Marriage),
    TrumpExchange(TrumpExchange),
}

impl Move {
    pub fn regular(card: Card) -> Self {
        Move::Regular(RegularMove::new(card))
    }

    pub fn is_regular_move(&self) -> bool {
        matches!(self, Move::Regular(_))
    }

    pub fn is_marriage(&self) -> bool {
        matches!(self, Move::Marriage(_))
    }

    pub fn is_trump_exchange(&self) -> bool {
        matches!(self, Move::TrumpExchange(_))
    }

    /// Cards this move shows on the table.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            Move::Regular(regular) => vec![regular.card],
            Move::Marriage(marriage) => vec![marriage.queen, marriage.king],
            Move::TrumpExchange(exchange) => vec![exchange.jack],
        }
    }

    /// The first card shown: the played card, the marriage queen, or the exchanged jack.
    pub fn primary_card(&self) -> Card {
        match self {
            Move::Regular(regular) => regular.card,
            Move::Marriage(marriage) => marriage.queen,
            Move::TrumpExchange(exchange) => exchange.jack,
        }
    }

    /// The leading part of a regular trick, or `None` for a trump exchange.
    pub fn as_partial(&self) -> Option<PartialTrick> {
        match self {
            Move::Regular(regular) => Some(PartialTrick::Regular(*regular)),
            Move::Marriage(marriage) => Some(PartialTrick::Marriage(*marriage)),
            Move::TrumpExchange(_) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Regular(regular) => write!(f, "{}", regular.card),
            Move::Marriage(marriage) => {
                write!(f, "marriage({}+{})", marriage.queen, marriage.king)
            }
            Move::TrumpExchange(exchange) => write!(f, "exchange({})", exchange.jack),
        }
    }
}

/// The leader's half of a regular trick while the follower is still to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialTrick {
    Regular(RegularMove),
    Marriage(Marriage),
}

impl PartialTrick {
    /// The card that competes for the trick. A marriage competes with its queen.
    pub fn regular_card(&self) -> Card {
        match self {
            PartialTrick::Regular(regular) => regular.card,
            PartialTrick::Marriage(marriage) => marriage.queen,
        }
    }

    pub fn as_move(&self) -> Move {
        match self {
            PartialTrick::Regular(regular) => Move::Regular(*regular),
            PartialTrick::Marriage(marriage) => Move::Marriage(*marriage),
        }
    }

    pub fn cards(&self) -> Vec<Card> {
        self.as_move().cards()
    }
}
