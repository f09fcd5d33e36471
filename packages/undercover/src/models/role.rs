use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Villager, // knows the common word
    Spy,      // knows the related word
    White,    // knows nothing
}

impl Role {
    pub fn is_villager(self) -> bool {
        matches!(self, Role::Villager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Villager => write!(f, "villager"),
            Role::Spy => write!(f, "undercover"),
            Role::White => write!(f, "Mr. White"),
        }
    }
}

/// Side that took the points when a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Villagers,
    Infiltrators,
    /// An eliminated White guessed the villager word.
    White,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Villagers => write!(f, "villagers"),
            Team::Infiltrators => write!(f, "undercovers and Mr. White"),
            Team::White => write!(f, "Mr. White"),
        }
    }
}
