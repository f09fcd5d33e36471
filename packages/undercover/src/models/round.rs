use serde::{Deserialize, Serialize};
use std::fmt;

use super::role::Team;

/// Shown to a White instead of a word.
pub const WHITE_PLACEHOLDER: &str = "You are Mr. White ;)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    WordReveal,        // everyone peeks at their word
    Discussion,        // clues and eliminations
    WhiteGuessing,     // eliminated White guesses the villager word
    WhiteGuessedWrong, // short pause before discussion resumes
    WhiteGuessedRight,
    RoundOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Word pair as returned by the word service: `[villagerWord, spyWord]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct WordPair {
    pub villager: String,
    pub spy: String,
}

impl WordPair {
    pub fn new(villager: impl Into<String>, spy: impl Into<String>) -> Self {
        Self {
            villager: villager.into(),
            spy: spy.into(),
        }
    }
}

impl From<(String, String)> for WordPair {
    fn from((villager, spy): (String, String)) -> Self {
        Self { villager, spy }
    }
}

impl From<WordPair> for (String, String) {
    fn from(pair: WordPair) -> Self {
        (pair.villager, pair.spy)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winners: Team,
    /// Flavor only: the double agent ended up with points this round.
    pub double_agent_won: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    pub id: u64,
    pub villager_word: String,
    pub spy_word: Option<String>,
    pub phase: Phase,
    pub round_number: u32,
    pub pending_white_guesser: Option<usize>,
    pub double_agent: Option<usize>,
    pub first_clue: Option<usize>,
    pub outcome: Option<RoundOutcome>,
}

impl Round {
    pub fn new(id: u64, words: WordPair, has_spies: bool, double_agent: Option<usize>) -> Self {
        Round {
            id,
            villager_word: words.villager,
            spy_word: has_spies.then_some(words.spy),
            phase: Phase::WordReveal,
            round_number: 0,
            pending_white_guesser: None,
            double_agent,
            first_clue: None,
            outcome: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }
}

/// Secret word handed to one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCard {
    pub player: usize,
    pub name: String,
    pub word: String,
}
