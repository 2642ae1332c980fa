use crate::bot::fixed::FirstFixedMoveThenBaseBot;
use crate::bot::params::{BotConfigError, RdeepParams};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use schnapsen_core::model::moves::{Move, PartialTrick};
use schnapsen_core::{Bot, BotRef, GameError, GamePlayEngine, GameState, PlayerPerspective, bot_ref};
use std::rc::Rc;
use tracing::{Level, event};

/// Monte-Carlo rollout search.
///
/// Every legal move is scored by sampling `samples` hidden-card assignments, playing
/// the move followed by `depth` tricks of the baseline policy on both sides, and
/// averaging this seat's share of the direct points.
#[derive(Debug, Clone)]
pub struct RdeepBot {
    params: RdeepParams,
    rng: StdRng,
}

impl RdeepBot {
    pub fn new(params: RdeepParams, seed: u64) -> Result<Self, BotConfigError> {
        Ok(Self {
            params: params.validated()?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn params(&self) -> RdeepParams {
        self.params
    }

    fn baseline(&mut self) -> BotRef {
        self.params.baseline.build(self.rng.next_u64())
    }

    fn evaluate(
        &mut self,
        sampled: &GameState,
        engine: &GamePlayEngine,
        leader_move: Option<PartialTrick>,
        candidate: Move,
    ) -> Result<f64, GameError> {
        let me: BotRef = bot_ref(FirstFixedMoveThenBaseBot::new(self.baseline(), candidate));
        let (leader, follower) = match leader_move {
            Some(partial) => {
                let opponent: BotRef =
                    bot_ref(FirstFixedMoveThenBaseBot::new(self.baseline(), partial.as_move()));
                (opponent, Rc::clone(&me))
            }
            None => (Rc::clone(&me), self.baseline()),
        };

        let (end, _) = engine.play_at_most_n_tricks(sampled, leader, follower, self.params.depth)?;
        let (mine, theirs) = if end.leader().is_same_bot(&me) {
            (end.leader().score(), end.follower().score())
        } else {
            (end.follower().score(), end.leader().score())
        };
        Ok(share(mine.direct_points, theirs.direct_points))
    }
}

fn share(mine: u32, theirs: u32) -> f64 {
    let total = mine + theirs;
    if total == 0 {
        0.5
    } else {
        f64::from(mine) / f64::from(total)
    }
}

/// Highest scoring candidate. Ties keep the earliest one.
fn best_candidate<F>(candidates: Vec<Move>, mut score: F) -> Result<Option<(Move, f64)>, GameError>
where
    F: FnMut(Move) -> Result<f64, GameError>,
{
    let mut best: Option<(Move, f64)> = None;
    for candidate in candidates {
        let value = score(candidate)?;
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((candidate, value));
        }
    }
    Ok(best)
}

fn average_of<F>(samples: usize, mut sample: F) -> Result<f64, GameError>
where
    F: FnMut() -> Result<f64, GameError>,
{
    let mut total = 0.0;
    for _ in 0..samples {
        total += sample()?;
    }
    Ok(total / samples as f64)
}

impl Bot for RdeepBot {
    fn get_move(
        &mut self,
        perspective: &PlayerPerspective<'_>,
        leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError> {
        let mut moves = perspective.valid_moves()?;
        moves.shuffle(&mut self.rng);
        let engine = perspective.get_engine();

        let samples = self.params.samples;
        let depth = self.params.depth;
        let best = best_candidate(moves, |candidate| {
            let average = average_of(samples, || {
                let sampled = perspective.make_assumption(&mut self.rng)?;
                self.evaluate(&sampled, engine, leader_move, candidate)
            })?;
            event!(
                target: "schnapsen_bot::rdeep",
                Level::TRACE,
                candidate = %candidate,
                average,
                samples,
                depth,
            );
            Ok(average)
        })?;

        let (chosen, score) =
            best.ok_or_else(|| GameError::InvalidState("no legal moves to choose from".into()))?;
        event!(
            target: "schnapsen_bot::rdeep",
            Level::DEBUG,
            chosen = %chosen,
            score,
            role = %perspective.role(),
        );
        Ok(chosen)
    }

    fn name(&self) -> &str {
        "rdeep"
    }
}

#[cfg(test)]
mod tests {
    use super::{RdeepBot, average_of, best_candidate, share};
    use crate::bot::params::{Baseline, BotConfigError, RdeepParams};
    use schnapsen_core::game::bot_state::BotState;
    use schnapsen_core::model::card::Card;
    use schnapsen_core::model::deck::Deck;
    use schnapsen_core::model::hand::Hand;
    use schnapsen_core::model::moves::{Move, PartialTrick, RegularMove};
    use schnapsen_core::model::rank::Rank;
    use schnapsen_core::model::score::Score;
    use schnapsen_core::model::suit::Suit;
    use schnapsen_core::model::talon::Talon;
    use schnapsen_core::{
        Bot, GameError, GamePlayEngine, GameState, PlaceholderBot, PlayerPerspective,
    };

    fn clubs(rank: Rank) -> Card {
        Card::new(rank, Suit::Clubs)
    }

    #[test]
    fn share_of_points() {
        assert_eq!(share(0, 0), 0.5);
        assert_eq!(share(30, 10), 0.75);
        assert_eq!(share(0, 12), 0.0);
    }

    #[test]
    fn rejects_empty_budgets() {
        let params = RdeepParams {
            samples: 0,
            depth: 2,
            baseline: Baseline::Random,
        };
        assert!(matches!(
            RdeepBot::new(params, 1),
            Err(BotConfigError::NoSamples(0))
        ));
    }

    #[test]
    fn picks_legal_moves_as_leader_and_follower() {
        let engine = GamePlayEngine::new();
        let params = RdeepParams::new(3, 3, Baseline::Random).unwrap();
        for seed in 0..4u64 {
            let state = engine
                .deal(
                    PlaceholderBot::handle(),
                    PlaceholderBot::handle(),
                    Deck::shuffled_with_seed(seed),
                )
                .unwrap();
            let mut bot = RdeepBot::new(params, seed).unwrap();

            let leader_view = PlayerPerspective::leader(&state, &engine);
            let lead = bot.get_move(&leader_view, None).unwrap();
            assert!(engine.move_validator().is_legal_leader_move(&state, &lead));

            let partial = PartialTrick::Regular(RegularMove::new(state.leader().hand().cards()[0]));
            let follower_view = PlayerPerspective::follower(&state, &engine, partial);
            let answer = bot.get_move(&follower_view, Some(partial)).unwrap();
            assert!(engine
                .move_validator()
                .is_legal_follower_move(&state, partial, &answer));
        }
    }

    #[test]
    fn best_candidate_takes_the_highest_score() {
        let candidates = vec![
            Move::regular(clubs(Rank::Jack)),
            Move::regular(clubs(Rank::Ace)),
            Move::regular(clubs(Rank::Ten)),
        ];
        let best = best_candidate(candidates, |candidate| {
            Ok(f64::from(candidate.primary_card().points()) / 11.0)
        })
        .unwrap();
        assert_eq!(best, Some((Move::regular(clubs(Rank::Ace)), 1.0)));
    }

    #[test]
    fn best_candidate_keeps_the_first_of_equal_scores() {
        let candidates = vec![
            Move::regular(clubs(Rank::Queen)),
            Move::regular(clubs(Rank::King)),
            Move::regular(clubs(Rank::Jack)),
        ];
        let best = best_candidate(candidates.clone(), |candidate| {
            Ok(if candidate == candidates[2] { 0.25 } else { 0.5 })
        })
        .unwrap();
        assert_eq!(best, Some((candidates[0], 0.5)));

        assert_eq!(best_candidate(Vec::new(), |_| Ok(1.0)).unwrap(), None);
    }

    #[test]
    fn best_candidate_stops_on_the_first_error() {
        let mut scored = 0;
        let outcome = best_candidate(
            vec![Move::regular(clubs(Rank::Queen)), Move::regular(clubs(Rank::King))],
            |_| {
                scored += 1;
                Err(GameError::NotPlayable)
            },
        );
        assert_eq!(outcome, Err(GameError::NotPlayable));
        assert_eq!(scored, 1);
    }

    #[test]
    fn average_of_means_every_sample() {
        let values = [1.0, 0.0, 0.75, 0.25];
        let mut calls = 0;
        let average = average_of(values.len(), || {
            let value = values[calls];
            calls += 1;
            Ok(value)
        })
        .unwrap();
        assert_eq!(calls, 4);
        assert_eq!(average, 0.5);

        // A single good sample no longer wins once the others are averaged in.
        let steady = average_of(4, || Ok(0.6)).unwrap();
        assert!(steady > average);
    }

    #[test]
    fn follower_takes_the_trick_with_the_most_points() {
        let engine = GamePlayEngine::new();
        let state = GameState::new(
            BotState::with_progress(
                PlaceholderBot::handle(),
                Hand::with_cards(vec![clubs(Rank::Jack), Card::new(Rank::Queen, Suit::Spades)])
                    .unwrap(),
                Score::direct(30),
                Vec::new(),
            ),
            BotState::with_progress(
                PlaceholderBot::handle(),
                Hand::with_cards(vec![clubs(Rank::Ten), clubs(Rank::Ace)]).unwrap(),
                Score::direct(20),
                Vec::new(),
            ),
            Talon::new(Vec::new(), Some(Suit::Hearts)).unwrap(),
            None,
        );
        let lead = PartialTrick::Regular(RegularMove::new(clubs(Rank::Jack)));
        let view = PlayerPerspective::follower(&state, &engine, lead);
        let params = RdeepParams::new(2, 1, Baseline::Random).unwrap();
        for seed in 0..8u64 {
            let mut bot = RdeepBot::new(params, seed).unwrap();
            let chosen = bot.get_move(&view, Some(lead)).unwrap();
            assert_eq!(chosen, Move::regular(clubs(Rank::Ace)));
        }
    }
}
