use crate::agent::BotRef;
use crate::game::bot_state::BotState;
use crate::model::card::Card;
use crate::model::suit::Suit;
use crate::model::talon::Talon;
use crate::model::trick::Trick;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Cards remain on the talon; following is free.
    One,
    /// Talon exhausted; follow-suit rules apply.
    Two,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::One => f.write_str("one"),
            GamePhase::Two => f.write_str("two"),
        }
    }
}

/// Link from a state back to the state and trick that produced it.
#[derive(Debug, Clone)]
pub struct Previous {
    pub state: Rc<GameState>,
    pub trick: Trick,
    pub leader_remained_leader: bool,
}

/// A snapshot between two tricks. States are never mutated once another state
/// points at them through [`Previous`].
#[derive(Debug, Clone)]
pub struct GameState {
    leader: BotState,
    follower: BotState,
    talon: Talon,
    previous: Option<Previous>,
}

impl GameState {
    pub fn new(
        leader: BotState,
        follower: BotState,
        talon: Talon,
        previous: Option<Previous>,
    ) -> Self {
        Self {
            leader,
            follower,
            talon,
            previous,
        }
    }

    pub fn leader(&self) -> &BotState {
        &self.leader
    }

    pub fn follower(&self) -> &BotState {
        &self.follower
    }

    pub fn talon(&self) -> &Talon {
        &self.talon
    }

    pub fn previous(&self) -> Option<&Previous> {
        self.previous.as_ref()
    }

    pub fn trump_suit(&self) -> Suit {
        self.talon.trump_suit()
    }

    pub fn game_phase(&self) -> GamePhase {
        if self.talon.is_empty() {
            GamePhase::Two
        } else {
            GamePhase::One
        }
    }

    pub fn are_all_cards_played(&self) -> bool {
        self.leader.hand().is_empty() && self.follower.hand().is_empty() && self.talon.is_empty()
    }

    /// Deep copy of seats and talon without history, ready to be advanced by one trick.
    pub fn copy_for_next(&self) -> Self {
        Self {
            leader: self.leader.clone(),
            follower: self.follower.clone(),
            talon: self.talon.clone(),
            previous: None,
        }
    }

    /// Deep copy seated by other bots. History is kept.
    pub fn copy_with_other_bots(&self, new_leader: BotRef, new_follower: BotRef) -> Self {
        Self {
            leader: self.leader.with_bot(new_leader),
            follower: self.follower.with_bot(new_follower),
            talon: self.talon.clone(),
            previous: self.previous.clone(),
        }
    }

    /// Every card held, won, or waiting on the talon. Always the full deck.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(crate::model::card::DECK_SIZE);
        for seat in [&self.leader, &self.follower] {
            cards.extend(seat.hand().iter().copied());
            cards.extend_from_slice(seat.won_cards());
        }
        cards.extend_from_slice(self.talon.cards());
        cards
    }

    pub(crate) fn leader_mut(&mut self) -> &mut BotState {
        &mut self.leader
    }

    pub(crate) fn follower_mut(&mut self) -> &mut BotState {
        &mut self.follower
    }

    pub(crate) fn talon_mut(&mut self) -> &mut Talon {
        &mut self.talon
    }

    pub(crate) fn set_previous(&mut self, previous: Previous) {
        self.previous = Some(previous);
    }

    pub(crate) fn into_parts(self) -> (BotState, BotState, Talon) {
        (self.leader, self.follower, self.talon)
    }
}
