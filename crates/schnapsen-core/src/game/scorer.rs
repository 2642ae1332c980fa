use crate::error::GameError;
use crate::game::bot_state::BotState;
use crate::game::state::GameState;
use crate::model::moves::Marriage;
use crate::model::rank::Rank;
use crate::model::score::Score;
use crate::model::suit::Suit;
use crate::model::trick::RegularTrick;

/// Direct points needed to end the game.
pub const WINNING_POINTS: u32 = 66;
/// Below this the loser is "schneider" and the winner earns two game points.
pub const SCHNEIDER_POINTS: u32 = 33;

pub const ROYAL_MARRIAGE_POINTS: u32 = 40;
pub const MARRIAGE_POINTS: u32 = 20;

#[derive(Debug, Default, Clone, Copy)]
pub struct TrickScorer;

impl TrickScorer {
    pub fn rank_to_points(&self, rank: Rank) -> u32 {
        rank.points()
    }

    /// Pending points earned by declaring `marriage` in `state`.
    pub fn marriage(&self, marriage: &Marriage, state: &GameState) -> Score {
        if marriage.suit() == state.trump_suit() {
            Score::pending(ROYAL_MARRIAGE_POINTS)
        } else {
            Score::pending(MARRIAGE_POINTS)
        }
    }

    /// Resolves a trick. Returns `(winner, loser, leader_remained_leader)` with the
    /// winner already credited.
    pub fn score(
        &self,
        trick: &RegularTrick,
        leader: BotState,
        follower: BotState,
        trump: Suit,
    ) -> Result<(BotState, BotState, bool), GameError> {
        let leader_card = trick.leader_card();
        let follower_card = trick.follower_card();
        if leader_card == follower_card {
            return Err(GameError::inconsistency(format!(
                "both seats played {leader_card}"
            )));
        }
        let leader_points = self.rank_to_points(leader_card.rank);
        let follower_points = self.rank_to_points(follower_card.rank);

        let leader_wins = if leader_card.suit == follower_card.suit {
            leader_points > follower_points
        } else if leader_card.suit == trump {
            true
        } else {
            follower_card.suit != trump
        };

        let (mut winner, loser) = if leader_wins {
            (leader, follower)
        } else {
            (follower, leader)
        };
        winner.add_won_cards(&[leader_card, follower_card]);
        winner.add_score(Score::direct(leader_points + follower_points));
        winner.redeem_pending_points();
        Ok((winner, loser, leader_wins))
    }

    /// The game winner with the game points earned, if the game is over. The winner is
    /// always the current leader since the last trick's winner leads next.
    pub fn declare_winner<'s>(
        &self,
        state: &'s GameState,
    ) -> Result<Option<(&'s BotState, u32)>, GameError> {
        let leader = state.leader();
        let follower = state.follower();
        if leader.score().direct_points >= WINNING_POINTS {
            let opponent = follower.score().direct_points;
            let points = if opponent == 0 {
                3
            } else if opponent >= SCHNEIDER_POINTS {
                1
            } else {
                2
            };
            return Ok(Some((leader, points)));
        }
        if follower.score().direct_points >= WINNING_POINTS {
            return Err(GameError::inconsistency(
                "the follower reached the winning score without leading",
            ));
        }
        if state.are_all_cards_played() {
            return Ok(Some((leader, 1)));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::TrickScorer;
    use crate::agent::PlaceholderBot;
    use crate::error::GameError;
    use crate::game::bot_state::BotState;
    use crate::game::state::GameState;
    use crate::model::card::Card;
    use crate::model::hand::Hand;
    use crate::model::moves::{Marriage, PartialTrick, RegularMove};
    use crate::model::rank::Rank;
    use crate::model::score::Score;
    use crate::model::suit::Suit;
    use crate::model::talon::Talon;
    use crate::model::trick::RegularTrick;

    fn seat(score: Score) -> BotState {
        BotState::with_progress(PlaceholderBot::handle(), Hand::new(), score, Vec::new())
    }

    fn trick(leader: Card, follower: Card) -> RegularTrick {
        RegularTrick::new(
            PartialTrick::Regular(RegularMove::new(leader)),
            RegularMove::new(follower),
        )
    }

    fn resolve(leader: Card, follower: Card, trump: Suit) -> bool {
        let (_, _, leader_wins) = TrickScorer
            .score(&trick(leader, follower), seat(Score::default()), seat(Score::default()), trump)
            .unwrap();
        leader_wins
    }

    #[test]
    fn trick_winner_rules() {
        let ten_clubs = Card::new(Rank::Ten, Suit::Clubs);
        assert!(!resolve(ten_clubs, Card::new(Rank::Ace, Suit::Clubs), Suit::Hearts));
        assert!(resolve(ten_clubs, Card::new(Rank::King, Suit::Clubs), Suit::Hearts));
        assert!(!resolve(ten_clubs, Card::new(Rank::Jack, Suit::Hearts), Suit::Hearts));
        assert!(resolve(ten_clubs, Card::new(Rank::Ace, Suit::Spades), Suit::Hearts));
        assert!(resolve(ten_clubs, Card::new(Rank::Ace, Suit::Spades), Suit::Clubs));
    }

    #[test]
    fn winner_collects_cards_points_and_pending() {
        let leader = seat(Score::new(5, 20));
        let follower = seat(Score::new(7, 0));
        let played = trick(Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::Queen, Suit::Clubs));
        let (winner, loser, leader_wins) = TrickScorer
            .score(&played, leader, follower, Suit::Hearts)
            .unwrap();
        assert!(leader_wins);
        assert_eq!(winner.score(), Score::new(5 + 14 + 20, 0));
        assert_eq!(winner.won_cards().len(), 2);
        assert_eq!(loser.score(), Score::new(7, 0));
    }

    #[test]
    fn marriage_points_depend_on_trump() {
        let talon = Talon::new(vec![Card::new(Rank::Ace, Suit::Hearts)], None).unwrap();
        let state = GameState::new(seat(Score::default()), seat(Score::default()), talon, None);
        let royal = Marriage::new(
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
        )
        .unwrap();
        let plain = Marriage::new(
            Card::new(Rank::Queen, Suit::Clubs),
            Card::new(Rank::King, Suit::Clubs),
        )
        .unwrap();
        assert_eq!(TrickScorer.marriage(&royal, &state), Score::pending(40));
        assert_eq!(TrickScorer.marriage(&plain, &state), Score::pending(20));
    }

    fn finished(leader: u32, follower: u32) -> GameState {
        let talon = Talon::new(vec![Card::new(Rank::Ace, Suit::Hearts)], None).unwrap();
        GameState::new(
            seat(Score::direct(leader)),
            seat(Score::direct(follower)),
            talon,
            None,
        )
    }

    #[test]
    fn game_points_by_opponent_score() {
        let cases = [(66, 0, 3), (70, 12, 2), (66, 33, 1), (80, 40, 1)];
        for (leader, follower, expected) in cases {
            let state = finished(leader, follower);
            let (_, points) = TrickScorer.declare_winner(&state).unwrap().unwrap();
            assert_eq!(points, expected, "leader {leader} follower {follower}");
        }
        assert!(TrickScorer.declare_winner(&finished(65, 10)).unwrap().is_none());
    }

    #[test]
    fn follower_is_never_declared() {
        let state = finished(10, 70);
        assert!(matches!(
            TrickScorer.declare_winner(&state),
            Err(GameError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn last_trick_decides_when_cards_run_out() {
        let empty = Talon::new(Vec::new(), Some(Suit::Hearts)).unwrap();
        let state = GameState::new(seat(Score::direct(40)), seat(Score::direct(50)), empty, None);
        let (winner, points) = TrickScorer.declare_winner(&state).unwrap().unwrap();
        assert_eq!(points, 1);
        assert_eq!(winner.score().direct_points, 40);
    }
}
