use schnapsen_core::model::moves::{Move, PartialTrick};
use schnapsen_core::{Bot, BotRef, GameError, PlayerPerspective};

/// Plays a predetermined move once, then hands every decision to `base`.
pub struct FirstFixedMoveThenBaseBot {
    first_move: Option<Move>,
    base: BotRef,
}

impl FirstFixedMoveThenBaseBot {
    pub fn new(base: BotRef, first_move: Move) -> Self {
        Self {
            first_move: Some(first_move),
            base,
        }
    }
}

impl Bot for FirstFixedMoveThenBaseBot {
    fn get_move(
        &mut self,
        perspective: &PlayerPerspective<'_>,
        leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError> {
        match self.first_move.take() {
            Some(fixed) => Ok(fixed),
            None => self.base.borrow_mut().get_move(perspective, leader_move),
        }
    }

    fn name(&self) -> &str {
        "fixed-first"
    }
}
