use crate::error::GameError;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// Maximum number of cards a player holds at any time.
pub const HAND_CAPACITY: usize = 5;

/// Cards held by one player, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_CAPACITY),
        }
    }

    pub fn with_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() > HAND_CAPACITY {
            return Err(GameError::invalid_state(format!(
                "a hand holds at most {HAND_CAPACITY} cards, got {}",
                cards.len()
            )));
        }
        Ok(Self { cards })
    }

    pub fn add(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= HAND_CAPACITY {
            return Err(GameError::invalid_state(format!(
                "adding {card} would exceed the hand capacity of {HAND_CAPACITY}"
            )));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes one occurrence of `card`.
    pub fn remove(&mut self, card: Card) -> Result<(), GameError> {
        match self.cards.iter().position(|&c| c == card) {
            Some(index) => {
                self.cards.remove(index);
                Ok(())
            }
            None => Err(GameError::invalid_state(format!(
                "cannot remove {card} from hand {:?}",
                self.cards
            ))),
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn filter_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.suit == suit).collect()
    }

    pub fn filter_rank(&self, rank: Rank) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.rank == rank).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{HAND_CAPACITY, Hand};
    use crate::error::GameError;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::King, Suit::Clubs);
        hand.add(card).unwrap();
        assert!(hand.contains(card));
        hand.remove(card).unwrap();
        assert!(!hand.contains(card));
    }

    #[test]
    fn removing_absent_card_is_invalid_state() {
        let mut hand = Hand::new();
        let err = hand.remove(Card::new(Rank::Ace, Suit::Hearts)).unwrap_err();
        assert!(matches!(err, GameError::InvalidState(_)));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut hand = Hand::new();
        for rank in Rank::ORDERED {
            hand.add(Card::new(rank, Suit::Spades)).unwrap();
        }
        assert_eq!(hand.len(), HAND_CAPACITY);
        assert!(matches!(
            hand.add(Card::new(Rank::Ace, Suit::Hearts)),
            Err(GameError::InvalidState(_))
        ));
    }

    #[test]
    fn keeps_insertion_order() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::Ace, Suit::Spades)).unwrap();
        hand.add(Card::new(Rank::Jack, Suit::Clubs)).unwrap();
        assert_eq!(
            hand.cards(),
            &[
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Jack, Suit::Clubs)
            ]
        );
        assert_eq!(hand.filter_suit(Suit::Clubs).len(), 1);
        assert_eq!(hand.filter_rank(Rank::Ace).len(), 1);
    }
}
