use crate::model::card::Card;
use crate::model::moves::{Move, PartialTrick, RegularMove, TrumpExchange};

/// A leader move answered by a follower move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegularTrick {
    pub partial: PartialTrick,
    pub follower_move: RegularMove,
}

impl RegularTrick {
    pub fn new(partial: PartialTrick, follower_move: RegularMove) -> Self {
        Self {
            partial,
            follower_move,
        }
    }

    pub fn leader_move(&self) -> Move {
        self.partial.as_move()
    }

    pub fn leader_card(&self) -> Card {
        self.partial.regular_card()
    }

    pub fn follower_card(&self) -> Card {
        self.follower_move.card
    }
}

/// One resolved step of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trick {
    Exchange(TrumpExchange),
    Regular(RegularTrick),
}

impl Trick {
    pub fn is_trump_exchange(&self) -> bool {
        matches!(self, Trick::Exchange(_))
    }

    pub fn leader_move(&self) -> Move {
        match self {
            Trick::Exchange(exchange) => Move::TrumpExchange(*exchange),
            Trick::Regular(regular) => regular.leader_move(),
        }
    }

    pub fn follower_move(&self) -> Option<RegularMove> {
        match self {
            Trick::Exchange(_) => None,
            Trick::Regular(regular) => Some(regular.follower_move),
        }
    }

    /// Every card revealed by this trick, marriage kings and exchanged jacks included.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            Trick::Exchange(exchange) => vec![exchange.jack()],
            Trick::Regular(regular) => {
                let mut cards = regular.partial.cards();
                cards.push(regular.follower_move.card);
                cards
            }
        }
    }
}
