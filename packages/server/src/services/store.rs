use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use undercover::{Player, PlayerEntry, SetupForm};

const STORE_VERSION: u8 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported store version {0}")]
    UnsupportedVersion(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    pub player_count: usize,
    pub spy_count: usize,
    pub white_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredScore {
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredData {
    pub version: u8,
    #[serde(default)]
    pub config: Option<StoredConfig>,
    #[serde(default, rename = "lastPlayers", alias = "last_players")]
    pub last_players: Vec<PlayerEntry>,
    #[serde(default)]
    pub scores: Vec<StoredScore>,
}

impl Default for StoredData {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            config: None,
            last_players: Vec::new(),
            scores: Vec::new(),
        }
    }
}

/// Convenience memory of the last setup. Only used to pre-fill the setup
/// form; the live session never reads it back.
pub struct LocalStore {
    file_path: Option<PathBuf>,
    data: StoredData,
}

impl LocalStore {
    pub fn open(file_path: PathBuf) -> Self {
        let data = match load(&file_path) {
            Ok(data) => data,
            Err(e) => {
                warn!("ignoring store {}: {}", file_path.display(), e);
                StoredData::default()
            }
        };
        Self {
            file_path: Some(file_path),
            data,
        }
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            file_path: None,
            data: StoredData::default(),
        }
    }

    pub fn data(&self) -> &StoredData {
        &self.data
    }

    /// Scores as they stood when the last round ended, highest first.
    pub fn saved_scores(&self) -> Vec<StoredScore> {
        let mut scores = self.data.scores.clone();
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores
    }

    /// Setup form rebuilt from the remembered configuration and names.
    pub fn setup_form(&self) -> SetupForm {
        let mut form = match self.data.config {
            Some(c) => SetupForm::from_counts(c.player_count, c.spy_count, c.white_count),
            None => SetupForm::default(),
        };
        form.prefill(&self.data.last_players);
        form
    }

    /// Remembers the configuration, the names and the current scores.
    pub fn remember(&mut self, form: &SetupForm, players: &[Player]) {
        self.data.config = Some(StoredConfig {
            player_count: form.player_count,
            spy_count: form.spy_count,
            white_count: form.white_count,
        });
        self.data.last_players = form.entries.clone();
        self.data.scores = players
            .iter()
            .map(|p| StoredScore {
                name: p.name.clone(),
                score: p.score,
            })
            .collect();

        if let Err(e) = self.save() {
            warn!("failed to save store: {}", e);
        }
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.data)?)?;
        debug!("store written to {}", path.display());
        Ok(())
    }
}

fn load(path: &Path) -> Result<StoredData, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(StoredData::default()),
        Err(e) => return Err(e.into()),
    };
    let data: StoredData = serde_json::from_str(&text)?;
    if data.version != STORE_VERSION {
        return Err(StoreError::UnsupportedVersion(data.version));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use undercover::{Gender, Role};

    fn temp_file(name: &str) -> PathBuf {
        let unique = format!(
            "{}-{}-{}",
            name,
            std::process::id(),
            rand::random::<u32>()
        );
        std::env::temp_dir().join(unique).join("undercover.json")
    }

    #[test]
    fn missing_file_gives_defaults() {
        let store = LocalStore::open(temp_file("store-missing"));
        assert_eq!(store.data(), &StoredData::default());
        assert_eq!(store.setup_form(), SetupForm::default());
    }

    #[test]
    fn remember_round_trips_through_disk() {
        let path = temp_file("store-roundtrip");
        let mut form = SetupForm::default();
        form.set_player_count(5);
        form.set_white_count(2);
        form.entries[0] = PlayerEntry::new("Ana", Gender::Female);
        form.entries[1] = PlayerEntry::new("Bor", Gender::Male);
        let mut ana = Player::new("Ana".into(), Gender::Female, Role::Villager);
        ana.score = 9;

        let mut store = LocalStore::open(path.clone());
        store.remember(&form, &[ana]);

        let reopened = LocalStore::open(path.clone());
        let restored = reopened.setup_form();
        assert_eq!(restored.player_count, 5);
        assert_eq!(restored.white_count, 2);
        assert_eq!(restored.spy_count, form.spy_count);
        assert_eq!(restored.entries[1].name, "Bor");
        assert_eq!(
            reopened.data().scores,
            vec![StoredScore {
                name: "Ana".into(),
                score: 9
            }]
        );

        let _ = fs::remove_dir_all(path.parent().expect("parent exists"));
    }

    #[test]
    fn corrupt_or_future_files_are_ignored() {
        let path = temp_file("store-corrupt");
        let parent = path.parent().expect("parent exists").to_path_buf();
        fs::create_dir_all(&parent).expect("create dir");

        fs::write(&path, "{ not json").expect("write file");
        assert!(matches!(load(&path), Err(StoreError::Json(_))));
        assert_eq!(LocalStore::open(path.clone()).data(), &StoredData::default());

        fs::write(&path, r#"{"version": 9}"#).expect("write file");
        assert!(matches!(load(&path), Err(StoreError::UnsupportedVersion(9))));

        let _ = fs::remove_dir_all(&parent);
    }

    #[test]
    fn saved_scores_come_back_highest_first() {
        let mut store = LocalStore::in_memory();
        let scored = |name: &str, score| {
            let mut p = Player::new(name.into(), Gender::Male, Role::Villager);
            p.score = score;
            p
        };
        store.remember(
            &SetupForm::default(),
            &[scored("Ana", 2), scored("Bor", 9), scored("Cene", 5)],
        );

        let names: Vec<_> = store.saved_scores().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Bor", "Cene", "Ana"]);
    }

    #[test]
    fn in_memory_store_never_writes() {
        let mut store = LocalStore::in_memory();
        store.remember(&SetupForm::default(), &[]);
        assert!(store.data().config.is_some());
        assert!(store.save().is_ok());
    }
}
