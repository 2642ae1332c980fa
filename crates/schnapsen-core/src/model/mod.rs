pub mod card;
pub mod card_set;
pub mod deck;
pub mod hand;
pub mod moves;
pub mod rank;
pub mod score;
pub mod suit;
pub mod talon;
pub mod trick;
