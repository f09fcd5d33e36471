use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Phase, Player, Role, Round, RoundOutcome, Team};

pub const SPY_WIN: u32 = 5;
pub const SPY_WIN_WITH_DOUBLE_AGENT: u32 = 7;
pub const WHITE_WIN: u32 = 7;
pub const WHITE_WIN_WITH_DOUBLE_AGENT: u32 = 9;
pub const VILLAGER_WIN: u32 = 2;
pub const VILLAGER_WIN_WITH_DOUBLE_AGENT: u32 = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub villagers: usize,
    pub spies: usize,
    pub whites: usize,
}

impl RoleCounts {
    pub fn active(players: &[Player]) -> Self {
        let count = |role| players.iter().filter(|p| p.is_active_as(role)).count();
        RoleCounts {
            villagers: count(Role::Villager),
            spies: count(Role::Spy),
            whites: count(Role::White),
        }
    }
}

fn double_agent_active_as(players: &[Player], round: &Round, role: Role) -> bool {
    round
        .double_agent
        .and_then(|i| players.get(i))
        .is_some_and(|p| p.is_active_as(role))
}

/// Checks the end conditions in priority order and hands out the round's
/// points. Returns the winning side, or `None` when play continues.
pub fn settle(players: &mut [Player], round: &Round) -> Option<Team> {
    let counts = RoleCounts::active(players);

    if counts.villagers == 1 {
        let spy_points = if double_agent_active_as(players, round, Role::Spy) {
            SPY_WIN_WITH_DOUBLE_AGENT
        } else {
            SPY_WIN
        };
        let white_points = if double_agent_active_as(players, round, Role::White) {
            WHITE_WIN_WITH_DOUBLE_AGENT
        } else {
            WHITE_WIN
        };
        for player in players.iter_mut().filter(|p| p.active) {
            match player.role {
                Role::Spy => player.round_score_delta = spy_points,
                Role::White => player.round_score_delta = white_points,
                Role::Villager => {}
            }
        }
        return Some(Team::Infiltrators);
    }

    if counts.spies + counts.whites == 0 {
        let points = if double_agent_active_as(players, round, Role::Villager) {
            VILLAGER_WIN_WITH_DOUBLE_AGENT
        } else {
            VILLAGER_WIN
        };
        for player in players.iter_mut().filter(|p| p.is_active_as(Role::Villager)) {
            player.round_score_delta = points;
        }
        return Some(Team::Villagers);
    }

    None
}

/// Points for an eliminated White who named the villager word.
pub fn white_guess_points(round: &Round, guesser: usize) -> u32 {
    if round.double_agent == Some(guesser) {
        WHITE_WIN_WITH_DOUBLE_AGENT
    } else {
        WHITE_WIN
    }
}

/// Ends the round and folds every delta into the cumulative score.
pub fn close_round(players: &mut [Player], round: &mut Round, winners: Team) -> RoundOutcome {
    let double_agent_won = round
        .double_agent
        .and_then(|i| players.get(i))
        .is_some_and(|p| p.round_score_delta > 0);

    for player in players.iter_mut() {
        player.score += player.round_score_delta;
    }

    let outcome = RoundOutcome {
        winners,
        double_agent_won,
    };
    round.phase = Phase::RoundOver;
    round.outcome = Some(outcome.clone());
    info!(
        "round {} over: {} win (double agent on winning side: {})",
        round.id, winners, double_agent_won
    );
    outcome
}
