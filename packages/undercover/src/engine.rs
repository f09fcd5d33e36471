use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::GameError;
use crate::models::{
    Phase, Player, Role, Round, RoundOutcome, SetupForm, Team, WordCard, WordPair,
    WHITE_PLACEHOLDER,
};

mod roles;
mod scoring;

pub use roles::*;
pub use scoring::*;

/// Something that happened during a transition. The host forwards these to
/// whatever renders the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    RoundStarted { round_id: u64 },
    WordSeen { player: usize },
    DiscussionStarted { first_clue: Option<usize> },
    Eliminated { player: usize, role: Role },
    WhiteGuessing { player: usize },
    WhiteGuessed { player: usize, correct: bool },
    DiscussionResumed { round_number: u32 },
    RoundOver(RoundOutcome),
}

/// The whole game as owned by one controller. Players outlive rounds so
/// scores can accumulate; going back to setup drops them.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    pub players: Vec<Player>,
    pub round: Option<Round>,
    next_round_id: u64,
}

fn expect_phase(round: &Round, expected: Phase) -> Result<(), GameError> {
    if round.phase == expected {
        Ok(())
    } else {
        Err(GameError::WrongPhase {
            expected,
            actual: round.phase,
        })
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.round.as_ref().map(|r| r.phase)
    }

    /// Deals a fresh round from the setup form and an already fetched word
    /// pair. Nothing is touched when validation fails.
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        setup: &SetupForm,
        double_agent: bool,
        words: WordPair,
        rng: &mut R,
    ) -> Result<&Round, GameError> {
        if setup.entries.len() != setup.player_count {
            return Err(GameError::PlayerCountMismatch {
                expected: setup.player_count,
                actual: setup.entries.len(),
            });
        }
        let names = validate_names(&setup.entries)?;

        let roles = assign_roles(setup.player_count, setup.spy_count, setup.white_count, rng);
        let double_agent = pick_double_agent(double_agent, setup.player_count, rng);

        self.players.truncate(setup.player_count);
        for (i, ((name, entry), role)) in names.into_iter().zip(&setup.entries).zip(roles).enumerate() {
            match self.players.get_mut(i) {
                Some(player) => {
                    player.name = name;
                    player.gender = entry.gender;
                    player.reset_for_round(role);
                }
                None => self.players.push(Player::new(name, entry.gender, role)),
            }
        }

        self.next_round_id += 1;
        let round = Round::new(self.next_round_id, words, setup.spy_count > 0, double_agent);
        info!(
            "round {} dealt: {} players, {} spies, {} whites, double agent: {}",
            round.id,
            setup.player_count,
            setup.spy_count,
            setup.white_count,
            double_agent.is_some()
        );
        Ok(self.round.insert(round))
    }

    /// Drops the players (and their scores) and any round in progress.
    pub fn return_to_setup(&mut self) {
        self.players.clear();
        self.round = None;
    }

    pub fn word_for(&self, index: usize) -> Result<String, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoRound)?;
        let player = self.players.get(index).ok_or(GameError::UnknownPlayer(index))?;
        Ok(match player.role {
            Role::Villager => round.villager_word.clone(),
            Role::Spy => round.spy_word.clone().unwrap_or_default(),
            Role::White => WHITE_PLACEHOLDER.to_string(),
        })
    }

    /// Shows a player their word. Showing it again returns the same word and
    /// changes nothing, even after discussion has started. A first look is
    /// only allowed during word reveal. Once every active player has looked,
    /// discussion starts with a random first clue giver.
    pub fn reveal_word_to<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<(WordCard, Vec<Event>), GameError> {
        let word = self.word_for(index)?;
        let card = WordCard {
            player: index,
            name: self.players[index].name.clone(),
            word,
        };
        if self.players[index].has_seen_word {
            return Ok((card, Vec::new()));
        }

        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        expect_phase(round, Phase::WordReveal)?;

        let mut events = Vec::new();
        let player = &mut self.players[index];
        player.has_seen_word = true;
        events.push(Event::WordSeen { player: index });
        debug!("{} has seen their word", player.name);

        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        let everyone_seen = self
            .players
            .iter()
            .filter(|p| p.active)
            .all(|p| p.has_seen_word);
        if everyone_seen {
            round.phase = Phase::Discussion;
            let candidates: Vec<usize> = self
                .players
                .iter()
                .enumerate()
                .filter(|(_, p)| p.active && (p.role != Role::White || round.round_number > 0))
                .map(|(i, _)| i)
                .collect();
            round.first_clue = (!candidates.is_empty())
                .then(|| candidates[rng.gen_range(0..candidates.len())]);
            events.push(Event::DiscussionStarted {
                first_clue: round.first_clue,
            });
        }
        Ok((card, events))
    }

    pub fn eliminate(&mut self, index: usize) -> Result<Vec<Event>, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        expect_phase(round, Phase::Discussion)?;
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;
        if !player.active {
            return Err(GameError::AlreadyEliminated(player.name.clone()));
        }

        player.active = false;
        let role = player.role;
        info!("{} eliminated, was {}", player.name, role);
        let mut events = vec![Event::Eliminated {
            player: index,
            role,
        }];

        if role == Role::White {
            round.phase = Phase::WhiteGuessing;
            round.pending_white_guesser = Some(index);
            events.push(Event::WhiteGuessing { player: index });
            return Ok(events);
        }

        match settle(&mut self.players, round) {
            Some(winners) => {
                let outcome = close_round(&mut self.players, round, winners);
                events.push(Event::RoundOver(outcome));
            }
            None => round.round_number += 1,
        }
        Ok(events)
    }

    /// The eliminated White's single attempt at the villager word.
    pub fn guess_white_word(&mut self, attempt: &str) -> Result<Vec<Event>, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        expect_phase(round, Phase::WhiteGuessing)?;
        let guesser = round.pending_white_guesser.take().ok_or(GameError::WrongPhase {
            expected: Phase::WhiteGuessing,
            actual: round.phase,
        })?;

        let correct = attempt.trim().to_lowercase() == round.villager_word.trim().to_lowercase();
        let mut events = vec![Event::WhiteGuessed {
            player: guesser,
            correct,
        }];

        if correct {
            let player = self
                .players
                .get_mut(guesser)
                .ok_or(GameError::UnknownPlayer(guesser))?;
            player.active = true;
            player.round_score_delta = white_guess_points(round, guesser);
            round.phase = Phase::WhiteGuessedRight;
            let outcome = close_round(&mut self.players, round, Team::White);
            events.push(Event::RoundOver(outcome));
            return Ok(events);
        }

        match settle(&mut self.players, round) {
            Some(winners) => {
                let outcome = close_round(&mut self.players, round, winners);
                events.push(Event::RoundOver(outcome));
            }
            None => round.phase = Phase::WhiteGuessedWrong,
        }
        Ok(events)
    }

    /// Delayed end of the "bad luck" pause. Stale calls for an older round or
    /// a round that already moved on do nothing.
    pub fn resume_after_missed_guess(&mut self, round_id: u64) -> Vec<Event> {
        match self.round.as_mut() {
            Some(round) if round.id == round_id && round.phase == Phase::WhiteGuessedWrong => {
                round.phase = Phase::Discussion;
                round.round_number += 1;
                vec![Event::DiscussionResumed {
                    round_number: round.round_number,
                }]
            }
            _ => Vec::new(),
        }
    }

    pub fn counts(&self) -> RoleCounts {
        RoleCounts::active(&self.players)
    }
}
