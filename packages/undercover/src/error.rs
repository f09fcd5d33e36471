use thiserror::Error;

use crate::models::Phase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("player {index} has no name")]
    EmptyName { index: usize },
    #[error("two players are called {name}")]
    DuplicateName { name: String },
    #[error("expected {expected} players, got {actual}")]
    PlayerCountMismatch { expected: usize, actual: usize },
    #[error("no round is in progress")]
    NoRound,
    #[error("action not allowed during {actual} (needs {expected})")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("unknown player {0}")]
    UnknownPlayer(usize),
    #[error("{0} is already eliminated")]
    AlreadyEliminated(String),
}

impl GameError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GameError::EmptyName { .. }
                | GameError::DuplicateName { .. }
                | GameError::PlayerCountMismatch { .. }
        )
    }
}
