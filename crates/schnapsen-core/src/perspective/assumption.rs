use crate::agent::PlaceholderBot;
use crate::error::GameError;
use crate::game::state::{GamePhase, GameState};
use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::hand::Hand;
use crate::model::talon::Talon;
use crate::perspective::PlayerPerspective;
use rand::Rng;
use rand::seq::SliceRandom;

impl PlayerPerspective<'_> {
    /// Full-information copy of the state, seated by placeholders.
    pub fn get_state_in_phase_two(&self) -> Result<GameState, GameError> {
        match self.get_phase() {
            GamePhase::Two => Ok(self.placeholder_copy()),
            GamePhase::One => Err(GameError::InvalidPhase("the full game state")),
        }
    }

    /// Samples a full-information state consistent with everything this seat has seen.
    ///
    /// Seen cards keep their positions; every unseen talon or opponent-hand slot gets a
    /// card drawn from the shuffled unseen remainder. Both seats are taken by
    /// placeholders, so substitute bots before playing on.
    pub fn make_assumption<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameState, GameError> {
        let mut full_state = self.placeholder_copy();
        if self.get_phase() == GamePhase::Two {
            return Ok(full_state);
        }

        let seen = self.seen_cards();
        let mut unseen: Vec<Card> = CardSet::FULL.difference(seen).iter().collect();

        let opponent_hand = self.opponent_seat().hand().cards();
        let talon = self.state.talon();
        let open_slots = talon
            .cards()
            .iter()
            .chain(opponent_hand.iter())
            .filter(|card| !seen.contains(**card))
            .count();
        if open_slots != unseen.len() {
            return Err(GameError::inconsistency(format!(
                "{} unseen cards for {open_slots} hidden slots",
                unseen.len()
            )));
        }

        unseen.shuffle(rng);
        let mut fill = unseen.into_iter();
        let mut resolve = |card: &Card| -> Result<Card, GameError> {
            if seen.contains(*card) {
                return Ok(*card);
            }
            fill.next()
                .ok_or_else(|| GameError::inconsistency("ran out of unseen cards"))
        };

        let talon_cards = talon
            .cards()
            .iter()
            .map(&mut resolve)
            .collect::<Result<Vec<_>, _>>()?;
        let opponent_cards = opponent_hand
            .iter()
            .map(&mut resolve)
            .collect::<Result<Vec<_>, _>>()?;

        *full_state.talon_mut() = Talon::new(talon_cards, Some(talon.trump_suit()))?;
        let opponent = if self.am_i_leader() {
            full_state.follower_mut()
        } else {
            full_state.leader_mut()
        };
        opponent.replace_hand(Hand::with_cards(opponent_cards)?);
        Ok(full_state)
    }

    fn placeholder_copy(&self) -> GameState {
        self.state
            .copy_with_other_bots(PlaceholderBot::handle(), PlaceholderBot::handle())
    }
}

#[cfg(test)]
mod tests {
    use crate::agent::PlaceholderBot;
    use crate::error::GameError;
    use crate::game::engine::GamePlayEngine;
    use crate::model::card::Card;
    use crate::model::deck::Deck;
    use crate::perspective::PlayerPerspective;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn assumption_keeps_seen_cards_and_deck() {
        let engine = GamePlayEngine::new();
        let state = engine
            .deal(
                PlaceholderBot::handle(),
                PlaceholderBot::handle(),
                Deck::shuffled_with_seed(21),
            )
            .unwrap();
        let view = PlayerPerspective::leader(&state, &engine);
        let mut rng = SmallRng::seed_from_u64(4);

        let sampled = view.make_assumption(&mut rng).unwrap();
        assert_eq!(sampled.leader().hand(), state.leader().hand());
        assert_eq!(sampled.talon().trump_card(), state.talon().trump_card());
        assert_eq!(sampled.talon().len(), state.talon().len());

        let mut cards: Vec<Card> = sampled.all_cards();
        cards.sort_by_key(|card| card.to_id());
        cards.dedup();
        assert_eq!(cards.len(), 20);

        let placeholder_move = sampled
            .leader()
            .bot()
            .borrow_mut()
            .get_move(&PlayerPerspective::leader(&sampled, &engine), None);
        assert_eq!(placeholder_move, Err(GameError::NotPlayable));
    }

    #[test]
    fn full_state_only_in_phase_two() {
        let engine = GamePlayEngine::new();
        let state = engine
            .deal(
                PlaceholderBot::handle(),
                PlaceholderBot::handle(),
                Deck::shuffled_with_seed(2),
            )
            .unwrap();
        let view = PlayerPerspective::leader(&state, &engine);
        assert!(matches!(
            view.get_state_in_phase_two(),
            Err(GameError::InvalidPhase(_))
        ));
    }
}
