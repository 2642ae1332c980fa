use crate::agent::BotRef;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::score::Score;
use std::fmt;
use std::rc::Rc;

/// Everything the table knows about one seat.
#[derive(Clone)]
pub struct BotState {
    hand: Hand,
    score: Score,
    won_cards: Vec<Card>,
    bot: BotRef,
}

impl BotState {
    pub fn new(bot: BotRef, hand: Hand) -> Self {
        Self {
            hand,
            score: Score::default(),
            won_cards: Vec::new(),
            bot,
        }
    }

    pub fn with_progress(bot: BotRef, hand: Hand, score: Score, won_cards: Vec<Card>) -> Self {
        Self {
            hand,
            score,
            won_cards,
            bot,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn won_cards(&self) -> &[Card] {
        &self.won_cards
    }

    pub fn bot(&self) -> &BotRef {
        &self.bot
    }

    pub fn is_same_bot(&self, bot: &BotRef) -> bool {
        Rc::ptr_eq(&self.bot, bot)
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub(crate) fn add_score(&mut self, score: Score) {
        self.score += score;
    }

    pub(crate) fn redeem_pending_points(&mut self) {
        self.score = self.score.redeem_pending_points();
    }

    pub(crate) fn add_won_cards(&mut self, cards: &[Card]) {
        self.won_cards.extend_from_slice(cards);
    }

    /// Same hand, score and won cards, seated by a different bot.
    pub fn with_bot(&self, bot: BotRef) -> Self {
        Self {
            hand: self.hand.clone(),
            score: self.score,
            won_cards: self.won_cards.clone(),
            bot,
        }
    }

    pub(crate) fn replace_hand(&mut self, hand: Hand) {
        self.hand = hand;
    }
}

impl fmt::Debug for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .bot
            .try_borrow()
            .map(|bot| bot.name().to_string())
            .unwrap_or_else(|_| "<busy>".to_string());
        f.debug_struct("BotState")
            .field("bot", &name)
            .field("hand", &self.hand)
            .field("score", &self.score)
            .field("won_cards", &self.won_cards)
            .finish()
    }
}
