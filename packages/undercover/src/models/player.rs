use serde::{Deserialize, Serialize};

use super::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub gender: Gender,
    pub role: Role,
    pub active: bool,
    pub has_seen_word: bool,
    pub score: u32,
    pub round_score_delta: u32,
}

impl Player {
    pub fn new(name: String, gender: Gender, role: Role) -> Self {
        Self {
            name,
            gender,
            role,
            active: true,
            has_seen_word: false,
            score: 0,
            round_score_delta: 0,
        }
    }

    /// Clears the per-round flags. The cumulative score survives.
    pub fn reset_for_round(&mut self, role: Role) {
        self.role = role;
        self.active = true;
        self.has_seen_word = false;
        self.round_score_delta = 0;
    }

    pub fn is_active_as(&self, role: Role) -> bool {
        self.active && self.role == role
    }
}
