use crate::agent::BotRef;
use crate::error::GameError;
use crate::game::bot_state::BotState;
use crate::game::scorer::TrickScorer;
use crate::game::state::GameState;
use crate::game::trick_implementer::TrickImplementer;
use crate::game::validator::MoveValidator;
use crate::model::deck::Deck;
use crate::model::hand::{HAND_CAPACITY, Hand};
use crate::model::moves::Move;
use crate::model::score::Score;
use crate::model::talon::Talon;
use crate::perspective::PlayerPerspective;
use rand::Rng;
use std::fmt;
use std::rc::Rc;
use tracing::{Level, event};

/// Outcome of a finished game.
#[derive(Clone)]
pub struct GameResult {
    pub winner: BotRef,
    pub game_points: u32,
    pub score: Score,
}

impl fmt::Debug for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .winner
            .try_borrow()
            .map(|bot| bot.name().to_string())
            .unwrap_or_else(|_| "<busy>".to_string());
        f.debug_struct("GameResult")
            .field("winner", &name)
            .field("game_points", &self.game_points)
            .field("score", &self.score)
            .finish()
    }
}

/// Deals games and drives them trick by trick.
#[derive(Debug, Default, Clone, Copy)]
pub struct GamePlayEngine {
    move_validator: MoveValidator,
    trick_scorer: TrickScorer,
    trick_implementer: TrickImplementer,
}

impl GamePlayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_validator(&self) -> &MoveValidator {
        &self.move_validator
    }

    pub fn trick_scorer(&self) -> &TrickScorer {
        &self.trick_scorer
    }

    pub fn trick_implementer(&self) -> &TrickImplementer {
        &self.trick_implementer
    }

    /// Unshuffled deck every game starts from.
    pub fn initial_deck(&self) -> Deck {
        Deck::standard()
    }

    /// Alternating deal of the first ten cards, `bot_a` leading. The rest is the talon.
    pub fn deal(&self, bot_a: BotRef, bot_b: BotRef, deck: Deck) -> Result<GameState, GameError> {
        let cards = deck.into_cards();
        let dealt = HAND_CAPACITY * 2;
        if cards.len() <= dealt {
            return Err(GameError::InsufficientCards {
                requested: dealt + 1,
                available: cards.len(),
            });
        }
        let hand_a = cards[..dealt].iter().step_by(2).copied().collect();
        let hand_b = cards[1..dealt].iter().step_by(2).copied().collect();
        let talon = Talon::new(cards[dealt..].to_vec(), None)?;
        Ok(GameState::new(
            BotState::new(bot_a, Hand::with_cards(hand_a)?),
            BotState::new(bot_b, Hand::with_cards(hand_b)?),
            talon,
            None,
        ))
    }

    pub fn play_game<R: Rng + ?Sized>(
        &self,
        bot_a: BotRef,
        bot_b: BotRef,
        rng: &mut R,
    ) -> Result<GameResult, GameError> {
        let mut deck = self.initial_deck();
        deck.shuffle_in_place(rng);
        let state = self.deal(bot_a, bot_b, deck)?;
        self.play_game_from_state(state, None)
    }

    /// Continues a full game from `state` with other bots seated, optionally replaying
    /// a leader move that was already made.
    pub fn play_game_from_state_with_new_bots(
        &self,
        state: &GameState,
        new_leader: BotRef,
        new_follower: BotRef,
        leader_move: Option<Move>,
    ) -> Result<GameResult, GameError> {
        let copy = state.copy_with_other_bots(new_leader, new_follower);
        self.play_game_from_state(copy, leader_move)
    }

    /// Plays `state` to the end. A `leader_move` on an already decided state is
    /// rejected with [`GameError::GameAlreadyOver`].
    pub fn play_game_from_state(
        &self,
        state: GameState,
        leader_move: Option<Move>,
    ) -> Result<GameResult, GameError> {
        if leader_move.is_some() && self.trick_scorer.declare_winner(&state)?.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        let mut state = state;
        let mut pending_leader_move = leader_move;
        let mut tricks = 0usize;
        let (winner, game_points, score) = loop {
            if let Some((winner, points)) = self.trick_scorer.declare_winner(&state)? {
                break (Rc::clone(winner.bot()), points, winner.score());
            }
            state = match pending_leader_move.take() {
                Some(fixed) => {
                    if !self.move_validator.is_legal_leader_move(&state, &fixed) {
                        return Err(GameError::IllegalMove {
                            role: "leader",
                            attempted: fixed,
                        });
                    }
                    self.trick_implementer.play_trick_with_fixed_leader_move(
                        self,
                        Rc::new(state),
                        fixed,
                    )?
                }
                None => self.trick_implementer.play_trick(self, Rc::new(state))?,
            };
            tricks += 1;
        };

        let winner_view = PlayerPerspective::winner(&state, self);
        state
            .leader()
            .bot()
            .borrow_mut()
            .notify_game_end(true, &winner_view)?;
        let loser_view = PlayerPerspective::loser(&state, self);
        state
            .follower()
            .bot()
            .borrow_mut()
            .notify_game_end(false, &loser_view)?;

        event!(
            Level::INFO,
            tricks,
            game_points,
            winner_points = score.direct_points,
            loser_points = state.follower().score().direct_points,
            "game finished"
        );
        Ok(GameResult {
            winner,
            game_points,
            score,
        })
    }

    /// Plays up to `n` tricks from a copy of `state` seated by the given bots. Stops
    /// early once the game is decided. Nobody is told the game ended.
    pub fn play_at_most_n_tricks(
        &self,
        state: &GameState,
        new_leader: BotRef,
        new_follower: BotRef,
        n: usize,
    ) -> Result<(GameState, usize), GameError> {
        let mut current = state.copy_with_other_bots(new_leader, new_follower);
        let mut played = 0;
        while played < n {
            if self.trick_scorer.declare_winner(&current)?.is_some() {
                break;
            }
            current = self.trick_implementer.play_trick(self, Rc::new(current))?;
            played += 1;
        }
        Ok((current, played))
    }
}
