use crate::model::card::{Card, DECK_SIZE};

/// Set of cards packed into a 20-bit mask keyed by [`Card::to_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet(u32);

impl CardSet {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self((1u32 << DECK_SIZE) - 1);

    pub fn contains(self, card: Card) -> bool {
        self.0 & Self::bit(card) != 0
    }

    pub fn with(mut self, card: Card) -> Self {
        self.insert(card);
        self
    }

    pub fn insert(&mut self, card: Card) {
        self.0 |= Self::bit(card);
    }

    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        for card in cards {
            self.insert(card);
        }
    }

    pub fn union(self, other: CardSet) -> Self {
        Self(self.0 | other.0)
    }

    pub fn difference(self, other: CardSet) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cards in id order.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        (0..DECK_SIZE as u8)
            .filter(move |id| self.0 & (1u32 << *id) != 0)
            .filter_map(Card::from_id)
    }

    fn bit(card: Card) -> u32 {
        1u32 << card.to_id()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::EMPTY;
        set.extend(iter);
        set
    }
}
