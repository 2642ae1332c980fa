use crate::game::state::{GamePhase, GameState};
use crate::model::card::Card;
use crate::model::moves::{Marriage, Move, PartialTrick, RegularMove, TrumpExchange};
use crate::model::rank::Rank;

/// Computes the legal move sets for both seats.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveValidator;

impl MoveValidator {
    pub fn legal_leader_moves(&self, state: &GameState) -> Vec<Move> {
        let hand = state.leader().hand();
        let mut moves = RegularMove::from_cards(hand.cards());

        if !state.talon().is_empty() {
            let trump_jack = Card::new(Rank::Jack, state.trump_suit());
            if hand.contains(trump_jack) {
                if let Ok(exchange) = TrumpExchange::new(trump_jack) {
                    moves.push(Move::TrumpExchange(exchange));
                }
            }
        }

        for queen in hand.filter_rank(Rank::Queen) {
            let king = Card::new(Rank::King, queen.suit);
            if hand.contains(king) {
                if let Ok(marriage) = Marriage::new(queen, king) {
                    moves.push(Move::Marriage(marriage));
                }
            }
        }
        moves
    }

    pub fn legal_follower_moves(&self, state: &GameState, partial: PartialTrick) -> Vec<Move> {
        let hand = state.follower().hand();
        if state.game_phase() == GamePhase::One {
            return RegularMove::from_cards(hand.cards());
        }

        let leader_card = partial.regular_card();
        let same_suit = hand.filter_suit(leader_card.suit);
        if !same_suit.is_empty() {
            let higher: Vec<Card> = same_suit
                .iter()
                .copied()
                .filter(|card| card.points() > leader_card.points())
                .collect();
            if higher.is_empty() {
                return RegularMove::from_cards(&same_suit);
            }
            return RegularMove::from_cards(&higher);
        }

        let trump = state.trump_suit();
        let trumps = hand.filter_suit(trump);
        if leader_card.suit != trump && !trumps.is_empty() {
            return RegularMove::from_cards(&trumps);
        }
        RegularMove::from_cards(hand.cards())
    }

    pub fn is_legal_leader_move(&self, state: &GameState, candidate: &Move) -> bool {
        self.legal_leader_moves(state).contains(candidate)
    }

    pub fn is_legal_follower_move(
        &self,
        state: &GameState,
        partial: PartialTrick,
        candidate: &Move,
    ) -> bool {
        self.legal_follower_moves(state, partial).contains(candidate)
    }
}
