use serde::{Deserialize, Serialize};

use crate::engine::{RoleCounts, Session};
use crate::models::{Gender, Phase, Role, RoundOutcome};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub index: usize,
    pub name: String,
    pub gender: Gender,
    pub active: bool,
    pub has_seen_word: bool,
    pub score: u32,
    /// Only known for eliminated players, or for everyone once the round ends.
    pub role: Option<Role>,
}

/// Everything the table may see. Words and live roles never appear here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub round_id: Option<u64>,
    pub phase: Option<Phase>,
    pub round_number: u32,
    pub first_clue: Option<String>,
    pub double_agent: Option<String>,
    pub pending_white_guesser: Option<String>,
    pub remaining: Option<RoleCounts>,
    pub outcome: Option<RoundOutcome>,
    pub players: Vec<PlayerView>,
}

impl RoundView {
    pub fn project(session: &Session, show_roles: bool) -> Self {
        let round = session.round();
        let over = round.is_some_and(|r| r.is_over());
        let name_of = |i: Option<usize>| {
            i.and_then(|i| session.players.get(i))
                .map(|p| p.name.clone())
        };
        // roles and counts stay secret until everyone has seen their word
        let in_play = round.is_some_and(|r| r.phase != Phase::WordReveal);

        RoundView {
            round_id: round.map(|r| r.id),
            phase: round.map(|r| r.phase),
            round_number: round.map_or(0, |r| r.round_number),
            first_clue: round.and_then(|r| name_of(r.first_clue)),
            double_agent: round
                .filter(|_| in_play)
                .and_then(|r| name_of(r.double_agent)),
            pending_white_guesser: round.and_then(|r| name_of(r.pending_white_guesser)),
            remaining: in_play.then(|| session.counts()),
            outcome: round.and_then(|r| r.outcome.clone()),
            players: session
                .players
                .iter()
                .enumerate()
                .map(|(index, p)| PlayerView {
                    index,
                    name: p.name.clone(),
                    gender: p.gender,
                    active: p.active,
                    has_seen_word: p.has_seen_word,
                    score: p.score,
                    role: (show_roles || over || !p.active).then_some(p.role),
                })
                .collect(),
        }
    }
}
