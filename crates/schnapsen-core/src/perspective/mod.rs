//! Role-scoped read-only views over a [`GameState`].

mod assumption;
mod history;

use crate::error::GameError;
use crate::game::bot_state::BotState;
use crate::game::engine::GamePlayEngine;
use crate::game::state::{GamePhase, GameState};
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::moves::{Move, PartialTrick};
use crate::model::score::Score;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seat a perspective is taken from, and at what moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Leader,
    Follower,
    /// Following a trump exchange; there is nothing to play.
    ExchangeFollower,
    Winner,
    Loser,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Leader => "leader",
            Role::Follower => "follower",
            Role::ExchangeFollower => "exchange-follower",
            Role::Winner => "winner",
            Role::Loser => "loser",
        };
        f.write_str(label)
    }
}

/// What one bot is allowed to see of a game state.
#[derive(Debug, Clone)]
pub struct PlayerPerspective<'a> {
    state: &'a GameState,
    engine: &'a GamePlayEngine,
    role: Role,
    partial_trick: Option<PartialTrick>,
}

impl<'a> PlayerPerspective<'a> {
    pub fn leader(state: &'a GameState, engine: &'a GamePlayEngine) -> Self {
        Self::with_role(state, engine, Role::Leader, None)
    }

    pub fn follower(
        state: &'a GameState,
        engine: &'a GamePlayEngine,
        partial_trick: PartialTrick,
    ) -> Self {
        Self::with_role(state, engine, Role::Follower, Some(partial_trick))
    }

    pub fn exchange_follower(state: &'a GameState, engine: &'a GamePlayEngine) -> Self {
        Self::with_role(state, engine, Role::ExchangeFollower, None)
    }

    pub fn winner(state: &'a GameState, engine: &'a GamePlayEngine) -> Self {
        Self::with_role(state, engine, Role::Winner, None)
    }

    pub fn loser(state: &'a GameState, engine: &'a GamePlayEngine) -> Self {
        Self::with_role(state, engine, Role::Loser, None)
    }

    fn with_role(
        state: &'a GameState,
        engine: &'a GamePlayEngine,
        role: Role,
        partial_trick: Option<PartialTrick>,
    ) -> Self {
        Self {
            state,
            engine,
            role,
            partial_trick,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The leader's move of the trick in progress, for a follower view.
    pub fn partial_trick(&self) -> Option<PartialTrick> {
        self.partial_trick
    }

    pub fn am_i_leader(&self) -> bool {
        matches!(self.role, Role::Leader | Role::Winner)
    }

    pub fn get_engine(&self) -> &'a GamePlayEngine {
        self.engine
    }

    pub fn valid_moves(&self) -> Result<Vec<Move>, GameError> {
        let validator = self.engine.move_validator();
        match self.role {
            Role::Leader => Ok(validator.legal_leader_moves(self.state)),
            Role::Follower => {
                let partial = self.partial_trick.ok_or_else(|| {
                    GameError::invalid_state("follower view without the leader's move")
                })?;
                Ok(validator.legal_follower_moves(self.state, partial))
            }
            Role::ExchangeFollower => Ok(Vec::new()),
            Role::Winner | Role::Loser => Err(GameError::GameAlreadyOver),
        }
    }

    pub fn get_trump_suit(&self) -> Suit {
        self.state.trump_suit()
    }

    /// The face-up card at the bottom of the talon, gone once the talon is empty.
    pub fn get_trump_card(&self) -> Option<Card> {
        self.state.talon().trump_card()
    }

    pub fn get_talon_size(&self) -> usize {
        self.state.talon().len()
    }

    pub fn get_phase(&self) -> GamePhase {
        self.state.game_phase()
    }

    pub fn get_hand(&self) -> Hand {
        self.own_seat().hand().clone()
    }

    pub fn get_my_score(&self) -> Score {
        self.own_seat().score()
    }

    pub fn get_opponent_score(&self) -> Score {
        self.opponent_seat().score()
    }

    pub fn get_won_cards(&self) -> Vec<Card> {
        self.own_seat().won_cards().to_vec()
    }

    pub fn get_opponent_won_cards(&self) -> Vec<Card> {
        self.opponent_seat().won_cards().to_vec()
    }

    pub fn get_opponent_hand_in_phase_two(&self) -> Result<Hand, GameError> {
        match self.get_phase() {
            GamePhase::Two => Ok(self.opponent_seat().hand().clone()),
            GamePhase::One => Err(GameError::InvalidPhase("the opponent's hand")),
        }
    }

    fn own_seat(&self) -> &'a BotState {
        if self.am_i_leader() {
            self.state.leader()
        } else {
            self.state.follower()
        }
    }

    fn opponent_seat(&self) -> &'a BotState {
        if self.am_i_leader() {
            self.state.follower()
        } else {
            self.state.leader()
        }
    }
}
