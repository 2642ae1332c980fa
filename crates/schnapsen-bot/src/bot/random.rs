use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use schnapsen_core::model::moves::{Move, PartialTrick};
use schnapsen_core::{Bot, GameError, PlayerPerspective};

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandBot {
    rng: StdRng,
}

impl RandBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandBot {
    fn get_move(
        &mut self,
        perspective: &PlayerPerspective<'_>,
        _leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError> {
        let moves = perspective.valid_moves()?;
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| GameError::InvalidState("no legal moves to choose from".into()))
    }

    fn name(&self) -> &str {
        "rand"
    }
}
