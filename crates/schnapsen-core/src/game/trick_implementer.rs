use crate::error::GameError;
use crate::game::engine::GamePlayEngine;
use crate::game::state::{GameState, Previous};
use crate::model::moves::{Move, PartialTrick, RegularMove, TrumpExchange};
use crate::model::trick::{RegularTrick, Trick};
use crate::perspective::PlayerPerspective;
use std::rc::Rc;
use tracing::{Level, event};

/// Advances a game state by exactly one trick.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrickImplementer;

impl TrickImplementer {
    pub fn play_trick(
        &self,
        engine: &GamePlayEngine,
        old: Rc<GameState>,
    ) -> Result<GameState, GameError> {
        let leader_move = self.request_leader_move(engine, &old)?;
        self.play_trick_with_fixed_leader_move(engine, old, leader_move)
    }

    /// Plays a trick whose leader move is already decided. The move is not validated
    /// here.
    pub fn play_trick_with_fixed_leader_move(
        &self,
        engine: &GamePlayEngine,
        old: Rc<GameState>,
        leader_move: Move,
    ) -> Result<GameState, GameError> {
        let partial = match leader_move {
            Move::TrumpExchange(exchange) => return self.play_trump_exchange(old, exchange),
            Move::Regular(regular) => PartialTrick::Regular(regular),
            Move::Marriage(marriage) => PartialTrick::Marriage(marriage),
        };
        let follower_move = self.request_follower_move(engine, &old, partial)?;
        self.apply_regular_trick(engine, old, RegularTrick::new(partial, follower_move))
    }

    fn play_trump_exchange(
        &self,
        old: Rc<GameState>,
        exchange: TrumpExchange,
    ) -> Result<GameState, GameError> {
        let jack = exchange.jack();
        if jack.suit != old.trump_suit() {
            return Err(GameError::invalid_state(format!(
                "{jack} cannot be exchanged while {} is trump",
                old.trump_suit()
            )));
        }
        let mut next = old.copy_for_next();
        next.leader_mut().hand_mut().remove(jack)?;
        let old_trump = next.talon_mut().trump_exchange(jack)?;
        next.leader_mut().hand_mut().add(old_trump)?;
        next.follower()
            .bot()
            .borrow_mut()
            .notify_trump_exchange(exchange)?;

        event!(
            Level::DEBUG,
            jack = %jack,
            taken = %old_trump,
            "trump exchanged"
        );
        next.set_previous(Previous {
            state: old,
            trick: Trick::Exchange(exchange),
            leader_remained_leader: true,
        });
        Ok(next)
    }

    fn apply_regular_trick(
        &self,
        engine: &GamePlayEngine,
        old: Rc<GameState>,
        trick: RegularTrick,
    ) -> Result<GameState, GameError> {
        let mut next = old.copy_for_next();
        if let PartialTrick::Marriage(marriage) = trick.partial {
            let bonus = engine.trick_scorer().marriage(&marriage, &next);
            next.leader_mut().add_score(bonus);
        }
        next.leader_mut().hand_mut().remove(trick.leader_card())?;
        next.follower_mut().hand_mut().remove(trick.follower_card())?;

        let trump = next.trump_suit();
        let (leader, follower, mut talon) = next.into_parts();
        let (mut winner, mut loser, leader_remained_leader) =
            engine.trick_scorer().score(&trick, leader, follower, trump)?;

        if !talon.is_empty() {
            let mut drawn = talon.draw_cards(2)?.into_iter();
            if let (Some(first), Some(second)) = (drawn.next(), drawn.next()) {
                winner.hand_mut().add(first)?;
                loser.hand_mut().add(second)?;
            }
        }

        event!(
            Level::DEBUG,
            leader = %trick.leader_move(),
            follower = %trick.follower_card(),
            leader_remained_leader,
            winner_points = winner.score().direct_points,
            "trick played"
        );
        Ok(GameState::new(
            winner,
            loser,
            talon,
            Some(Previous {
                state: old,
                trick: Trick::Regular(trick),
                leader_remained_leader,
            }),
        ))
    }

    fn request_leader_move(
        &self,
        engine: &GamePlayEngine,
        state: &GameState,
    ) -> Result<Move, GameError> {
        let perspective = PlayerPerspective::leader(state, engine);
        let chosen = state
            .leader()
            .bot()
            .borrow_mut()
            .get_move(&perspective, None)?;
        if !engine.move_validator().is_legal_leader_move(state, &chosen) {
            return Err(GameError::IllegalMove {
                role: "leader",
                attempted: chosen,
            });
        }
        Ok(chosen)
    }

    fn request_follower_move(
        &self,
        engine: &GamePlayEngine,
        state: &GameState,
        partial: PartialTrick,
    ) -> Result<RegularMove, GameError> {
        let perspective = PlayerPerspective::follower(state, engine, partial);
        let chosen = state
            .follower()
            .bot()
            .borrow_mut()
            .get_move(&perspective, Some(partial))?;
        match chosen {
            Move::Regular(regular)
                if engine
                    .move_validator()
                    .is_legal_follower_move(state, partial, &chosen) =>
            {
                Ok(regular)
            }
            _ => Err(GameError::IllegalMove {
                role: "follower",
                attempted: chosen,
            }),
        }
    }
}
