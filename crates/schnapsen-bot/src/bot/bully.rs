use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use schnapsen_core::model::moves::{Move, PartialTrick};
use schnapsen_core::{Bot, GameError, PlayerPerspective};

/// Greedy bot: any trump first, then the leader's suit when following, otherwise the
/// move showing the most points.
#[derive(Debug, Clone)]
pub struct BullyBot {
    rng: StdRng,
}

impl BullyBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for BullyBot {
    fn get_move(
        &mut self,
        perspective: &PlayerPerspective<'_>,
        leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError> {
        let mut moves = perspective.valid_moves()?;
        moves.shuffle(&mut self.rng);

        let trump = perspective.get_trump_suit();
        let trumps: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|candidate| candidate.primary_card().suit == trump)
            .collect();
        if let Some(choice) = trumps.choose(&mut self.rng) {
            return Ok(*choice);
        }

        if let Some(lead) = leader_move.filter(|_| !perspective.am_i_leader()) {
            let led_suit = lead.regular_card().suit;
            let following: Vec<Move> = moves
                .iter()
                .copied()
                .filter(|candidate| candidate.primary_card().suit == led_suit)
                .collect();
            if let Some(choice) = following.choose(&mut self.rng) {
                return Ok(*choice);
            }
        }

        let mut best: Option<Move> = None;
        for candidate in moves {
            let better = best
                .map(|current| candidate.primary_card().points() > current.primary_card().points())
                .unwrap_or(true);
            if better {
                best = Some(candidate);
            }
        }
        best.ok_or_else(|| GameError::InvalidState("no legal moves to choose from".into()))
    }

    fn name(&self) -> &str {
        "bully"
    }
}
