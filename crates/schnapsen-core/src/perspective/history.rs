use crate::model::card::Card;
use crate::model::card_set::CardSet;
use crate::model::trick::Trick;
use crate::perspective::PlayerPerspective;

impl<'a> PlayerPerspective<'a> {
    /// Every view this seat had so far, oldest first, each paired with the trick played
    /// from it. The last entry is this view with no trick.
    pub fn get_game_history(&self) -> Vec<(PlayerPerspective<'a>, Option<&'a Trick>)> {
        let mut history = vec![(self.clone(), None)];
        let mut was_leader = self.am_i_leader();
        let mut current = self.state.previous();

        while let Some(previous) = current {
            // Leading before and after agree exactly when the leader kept the lead.
            was_leader = was_leader == previous.leader_remained_leader;
            let state = previous.state.as_ref();
            let view = if was_leader {
                PlayerPerspective::leader(state, self.engine)
            } else {
                match &previous.trick {
                    Trick::Exchange(_) => PlayerPerspective::exchange_follower(state, self.engine),
                    Trick::Regular(regular) => {
                        PlayerPerspective::follower(state, self.engine, regular.partial)
                    }
                }
            };
            history.push((view, Some(&previous.trick)));
            current = state.previous();
        }

        history.reverse();
        history
    }

    /// Cards this seat has had a chance to observe.
    pub fn seen_cards(&self) -> CardSet {
        let mut seen: CardSet = self.own_seat().hand().iter().copied().collect();
        if let Some(trump) = self.get_trump_card() {
            seen.insert(trump);
        }
        seen = seen.union(self.past_trick_cards());
        if let Some(partial) = self.partial_trick {
            seen.extend(partial.cards());
        }
        seen
    }

    /// Opponent cards this seat can place: all of them in phase two, otherwise those
    /// revealed by marriages, exchanges, or the trick in progress.
    pub fn get_known_cards_of_opponent_hand(&self) -> Vec<Card> {
        let opponent = self.opponent_seat().hand();
        if self.get_phase() == crate::game::state::GamePhase::Two {
            return opponent.cards().to_vec();
        }
        let seen = self.seen_cards();
        opponent
            .iter()
            .copied()
            .filter(|card| seen.contains(*card))
            .collect()
    }

    fn past_trick_cards(&self) -> CardSet {
        let mut cards = CardSet::EMPTY;
        let mut current = self.state.previous();
        while let Some(previous) = current {
            cards.extend(previous.trick.cards());
            current = previous.state.previous();
        }
        cards
    }
}

#[cfg(test)]
mod tests {
    use crate::agent::PlaceholderBot;
    use crate::game::engine::GamePlayEngine;
    use crate::model::deck::Deck;
    use crate::model::moves::{PartialTrick, RegularMove};
    use crate::perspective::PlayerPerspective;

    #[test]
    fn fresh_deal_has_single_history_entry() {
        let engine = GamePlayEngine::new();
        let state = engine
            .deal(
                PlaceholderBot::handle(),
                PlaceholderBot::handle(),
                Deck::shuffled_with_seed(11),
            )
            .unwrap();
        let view = PlayerPerspective::leader(&state, &engine);
        let history = view.get_game_history();
        assert_eq!(history.len(), 1);
        assert!(history[0].1.is_none());
        assert!(history[0].0.am_i_leader());
    }

    #[test]
    fn seen_cards_cover_hand_trump_and_lead() {
        let engine = GamePlayEngine::new();
        let state = engine
            .deal(
                PlaceholderBot::handle(),
                PlaceholderBot::handle(),
                Deck::shuffled_with_seed(5),
            )
            .unwrap();
        let lead = state.leader().hand().cards()[2];
        let view =
            PlayerPerspective::follower(&state, &engine, PartialTrick::Regular(RegularMove::new(lead)));

        let seen = view.seen_cards();
        assert_eq!(seen.len(), 7);
        assert!(seen.contains(lead));
        assert_eq!(seen, view.seen_cards());
        assert_eq!(view.get_known_cards_of_opponent_hand(), vec![lead]);
    }
}
