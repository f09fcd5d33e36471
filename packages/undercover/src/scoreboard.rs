use serde::{Deserialize, Serialize};

use crate::engine::Session;
use crate::models::{Gender, Role};

/// What a results row shows in place of an avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    Hidden { gender: Gender },
    Revealed { role: Role, gender: Gender },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub name: String,
    pub score: u32,
    /// Points earned this round, only when there were any.
    pub bonus: Option<u32>,
    /// Bar length relative to the leader, 0..=100.
    pub bar_percent: u32,
    pub active: bool,
    pub badge: Badge,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Words {
    pub villagers: String,
    pub spies: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub rows: Vec<StandingRow>,
    /// Both words, once the round is over.
    pub words: Option<Words>,
}

pub fn standings(session: &Session) -> Standings {
    let round_over = session.round().is_some_and(|r| r.is_over());

    let mut players: Vec<_> = session.players.iter().collect();
    // stable: ties keep seat order
    players.sort_by(|a, b| b.score.cmp(&a.score));
    let top = players.first().map_or(0, |p| p.score).max(1);

    let rows = players
        .into_iter()
        .map(|p| StandingRow {
            name: p.name.clone(),
            score: p.score,
            bonus: (p.round_score_delta > 0).then_some(p.round_score_delta),
            bar_percent: p.score * 100 / top,
            active: p.active,
            badge: if round_over || !p.active {
                Badge::Revealed {
                    role: p.role,
                    gender: p.gender,
                }
            } else {
                Badge::Hidden { gender: p.gender }
            },
        })
        .collect();

    let words = session
        .round()
        .filter(|r| r.is_over())
        .map(|r| Words {
            villagers: r.villager_word.clone(),
            spies: r.spy_word.clone(),
        });

    Standings { rows, words }
}
