use crate::error::GameError;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// The undealt stock. Index 0 is the top card; the last card is the face-up trump.
///
/// The trump suit is stored on its own so it survives the talon running empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talon {
    cards: Vec<Card>,
    trump_suit: Suit,
}

impl Talon {
    /// Builds a talon. With cards present the trump suit follows the bottom card and an
    /// explicit `trump_suit` must agree with it; an empty talon needs an explicit suit.
    pub fn new(cards: Vec<Card>, trump_suit: Option<Suit>) -> Result<Self, GameError> {
        let trump_suit = match (cards.last(), trump_suit) {
            (Some(bottom), Some(explicit)) if bottom.suit != explicit => {
                return Err(GameError::invalid_state(format!(
                    "trump suit {explicit} disagrees with the bottom card {bottom}"
                )));
            }
            (Some(bottom), _) => bottom.suit,
            (None, Some(explicit)) => explicit,
            (None, None) => {
                return Err(GameError::invalid_state(
                    "an empty talon needs an explicit trump suit",
                ));
            }
        };
        Ok(Self { cards, trump_suit })
    }

    /// Swaps the trump jack in for the bottom card and returns the old trump card.
    pub fn trump_exchange(&mut self, new_trump: Card) -> Result<Card, GameError> {
        if new_trump.rank != Rank::Jack {
            return Err(GameError::invalid_state(format!(
                "only a jack can be exchanged for the trump card, got {new_trump}"
            )));
        }
        if self.cards.len() < 2 {
            return Err(GameError::invalid_state(format!(
                "a trump exchange needs at least two talon cards, found {}",
                self.cards.len()
            )));
        }
        if new_trump.suit != self.trump_suit {
            return Err(GameError::invalid_state(format!(
                "{new_trump} does not match the trump suit {}",
                self.trump_suit
            )));
        }
        let bottom = self.cards.len() - 1;
        Ok(std::mem::replace(&mut self.cards[bottom], new_trump))
    }

    /// Removes and returns the top `amount` cards.
    pub fn draw_cards(&mut self, amount: usize) -> Result<Vec<Card>, GameError> {
        if amount > self.cards.len() {
            return Err(GameError::InsufficientCards {
                requested: amount,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..amount).collect())
    }

    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    /// The face-up bottom card, or `None` once the talon is exhausted.
    pub fn trump_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
