use crate::model::moves::Move;
use thiserror::Error;

/// Every failure the engine can report. None of them are recoverable mid-trick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A hand or talon operation broke a structural invariant.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// An agent returned a move outside the computed legal set.
    #[error("{role} played an illegal move: {attempted}")]
    IllegalMove {
        role: &'static str,
        attempted: Move,
    },
    /// A phase-two-only query was made while the talon still holds cards.
    #[error("{0} is only available in phase two")]
    InvalidPhase(&'static str),
    #[error("cannot draw {requested} cards from a talon holding {available}")]
    InsufficientCards { requested: usize, available: usize },
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
    /// A placeholder agent from an assumed state was asked to act.
    #[error(
        "placeholder bot cannot act; substitute real bots with copy_with_other_bots before continuing"
    )]
    NotPlayable,
    #[error("cannot request moves from a finished game")]
    GameAlreadyOver,
}

impl GameError {
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        GameError::InvalidState(message.into())
    }

    pub(crate) fn inconsistency(message: impl Into<String>) -> Self {
        GameError::InternalInconsistency(message.into())
    }
}
