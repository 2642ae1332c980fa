use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use schnapsen_core::model::moves::{Move, PartialTrick};
use schnapsen_core::model::suit::Suit;
use schnapsen_core::{Bot, GameError, PlayerPerspective};

/// Remembers the suit it played last.
///
/// When trailing it looks for a marriage or trump exchange. Otherwise it plays the
/// cheapest move of its previous suit. Failing both it plays a random regular move.
#[derive(Debug, Clone)]
pub struct SecondBot {
    rng: StdRng,
    last_suit: Option<Suit>,
}

impl SecondBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last_suit: None,
        }
    }

    pub fn last_suit(&self) -> Option<Suit> {
        self.last_suit
    }
}

fn move_points(candidate: &Move) -> u32 {
    match candidate {
        Move::TrumpExchange(_) => 0,
        other => other.primary_card().points(),
    }
}

impl Bot for SecondBot {
    fn get_move(
        &mut self,
        perspective: &PlayerPerspective<'_>,
        _leader_move: Option<PartialTrick>,
    ) -> Result<Move, GameError> {
        let valid = perspective.valid_moves()?;
        let mine = perspective.get_my_score().direct_points;
        let theirs = perspective.get_opponent_score().direct_points;

        let mut choices: Vec<Move> = Vec::new();
        if mine < theirs {
            choices.extend(
                valid
                    .iter()
                    .copied()
                    .filter(|candidate| candidate.is_marriage() || candidate.is_trump_exchange()),
            );
        } else if let Some(previous) = self.last_suit {
            let mut cheapest: Option<Move> = None;
            for candidate in valid.iter().copied() {
                if candidate.primary_card().suit != previous {
                    continue;
                }
                let keep = cheapest
                    .map(|current| move_points(&candidate) <= move_points(&current))
                    .unwrap_or(true);
                if keep {
                    cheapest = Some(candidate);
                }
            }
            choices.extend(cheapest);
        }

        if choices.is_empty() {
            choices.extend(valid.iter().copied().filter(Move::is_regular_move));
        }

        let selected = choices
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| GameError::InvalidState("no legal moves to choose from".into()))?;
        self.last_suit = Some(selected.primary_card().suit);
        Ok(selected)
    }

    fn name(&self) -> &str {
        "second"
    }
}

#[cfg(test)]
mod tests {
    use super::SecondBot;
    use schnapsen_core::model::deck::Deck;
    use schnapsen_core::{Bot, GamePlayEngine, PlaceholderBot, PlayerPerspective};

    #[test]
    fn first_move_is_regular_and_remembered() {
        let engine = GamePlayEngine::new();
        let state = engine
            .deal(
                PlaceholderBot::handle(),
                PlaceholderBot::handle(),
                Deck::shuffled_with_seed(31),
            )
            .unwrap();
        let view = PlayerPerspective::leader(&state, &engine);
        let mut bot = SecondBot::new(9);
        let chosen = bot.get_move(&view, None).unwrap();
        assert!(chosen.is_regular_move());
        assert_eq!(bot.last_suit(), Some(chosen.primary_card().suit));
    }

    #[test]
    fn repeats_the_cheapest_card_of_the_last_suit() {
        let engine = GamePlayEngine::new();
        let state = engine
            .deal(
                PlaceholderBot::handle(),
                PlaceholderBot::handle(),
                Deck::shuffled_with_seed(31),
            )
            .unwrap();
        let view = PlayerPerspective::leader(&state, &engine);
        let mut bot = SecondBot::new(9);
        let first = bot.get_move(&view, None).unwrap();
        let suit = first.primary_card().suit;

        let second = bot.get_move(&view, None).unwrap();
        let cheapest = state
            .leader()
            .hand()
            .filter_suit(suit)
            .into_iter()
            .map(|card| card.points())
            .min()
            .unwrap();
        assert_eq!(second.primary_card().suit, suit);
        assert_eq!(second.primary_card().points(), cheapest);
    }
}
