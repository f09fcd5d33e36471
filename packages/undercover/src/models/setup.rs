use serde::{Deserialize, Serialize};

use super::player::Gender;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 20;
/// Spies and Whites together never drop below this.
pub const MIN_OTHERS: usize = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub gender: Gender,
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }
}

/// Round configuration as edited on the setup screen.
///
/// Every setter keeps `spy_count + white_count` inside
/// `[MIN_OTHERS, max_others()]`. A change to one count only ever moves the
/// other one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupForm {
    pub player_count: usize,
    pub spy_count: usize,
    pub white_count: usize,
    pub entries: Vec<PlayerEntry>,
}

impl Default for SetupForm {
    fn default() -> Self {
        let mut form = SetupForm {
            player_count: 0,
            spy_count: 0,
            white_count: 0,
            entries: Vec::new(),
        };
        form.set_player_count(MIN_PLAYERS);
        form
    }
}

impl SetupForm {
    /// Restores a stored configuration. Values out of range are clamped the
    /// same way slider input would be.
    pub fn from_counts(player_count: usize, spy_count: usize, white_count: usize) -> Self {
        let mut form = SetupForm::default();
        form.set_player_count(player_count);
        form.set_spy_count(spy_count);
        form.set_white_count(white_count);
        form
    }

    pub fn max_others(&self) -> usize {
        self.player_count / 2
    }

    pub fn villager_count(&self) -> usize {
        self.player_count - self.spy_count - self.white_count
    }

    pub fn set_player_count(&mut self, n: usize) {
        let n = n.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.player_count = n;
        self.entries.resize_with(n, PlayerEntry::default);

        let max_others = self.max_others();
        self.spy_count = max_others.div_ceil(2);
        self.white_count = max_others / 2;
        self.set_spy_count(self.spy_count);
    }

    pub fn set_spy_count(&mut self, n: usize) {
        let max_others = self.max_others();
        self.spy_count = n.min(max_others);
        if self.white_count > max_others - self.spy_count {
            self.white_count = max_others - self.spy_count;
        } else if self.spy_count + self.white_count < MIN_OTHERS {
            self.white_count = MIN_OTHERS - self.spy_count;
        }
    }

    pub fn set_white_count(&mut self, n: usize) {
        let max_others = self.max_others();
        self.white_count = n.min(max_others);
        if self.spy_count > max_others - self.white_count {
            self.spy_count = max_others - self.white_count;
        } else if self.spy_count + self.white_count < MIN_OTHERS {
            self.spy_count = MIN_OTHERS - self.white_count;
        }
    }

    /// Fills the existing entries from a previously used player list.
    /// Entries beyond the current player count are ignored.
    pub fn prefill(&mut self, saved: &[PlayerEntry]) {
        for (entry, saved) in self.entries.iter_mut().zip(saved) {
            *entry = saved.clone();
        }
    }
}
