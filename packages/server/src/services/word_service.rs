use rand::Rng;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use undercover::WordPair;

pub const NEW_WORDS_PATH: &str = "/pod_krinko/new_words";

const BUILTIN_WORDS: &str = include_str!("../../data/words.csv");

#[derive(Error, Debug)]
pub enum WordServiceError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("word service answered {0}")]
    Status(reqwest::StatusCode),
    #[error("expected two words, got {0}")]
    Malformed(usize),
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word list has no usable pairs")]
    EmptyBank,
}

/// Client for an upstream `GET /pod_krinko/new_words` service.
#[derive(Clone)]
pub struct WordClient {
    client: Client,
    base_url: String,
}

impl WordClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, WordServiceError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub async fn fetch_pair(&self) -> Result<WordPair, WordServiceError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, NEW_WORDS_PATH))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WordServiceError::Status(response.status()));
        }

        let words: Vec<String> = response.json().await?;
        match <[String; 2]>::try_from(words) {
            Ok([villager, spy]) => Ok(WordPair::new(villager, spy)),
            Err(words) => Err(WordServiceError::Malformed(words.len())),
        }
    }
}

/// Word pairs read from a `;` separated file whose first line is a header.
#[derive(Clone, Debug)]
pub struct WordBank {
    pairs: Vec<(String, String)>,
}

impl WordBank {
    pub fn parse(text: &str) -> Self {
        let pairs = text
            .lines()
            .skip(1)
            .filter_map(|line| {
                let mut columns = line.split(';').map(str::trim);
                let first = columns.next().filter(|w| !w.is_empty())?;
                let second = columns.next().filter(|w| !w.is_empty())?;
                Some((first.to_string(), second.to_string()))
            })
            .collect();
        Self { pairs }
    }

    pub fn from_path(path: &Path) -> Result<Self, WordServiceError> {
        let bank = Self::parse(&std::fs::read_to_string(path)?);
        if bank.is_empty() {
            return Err(WordServiceError::EmptyBank);
        }
        Ok(bank)
    }

    pub fn builtin() -> Self {
        Self::parse(BUILTIN_WORDS)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Random row, random order within the row, trimmed and lower-cased.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WordPair, WordServiceError> {
        if self.pairs.is_empty() {
            return Err(WordServiceError::EmptyBank);
        }
        let (a, b) = &self.pairs[rng.gen_range(0..self.pairs.len())];
        let (a, b) = (a.trim().to_lowercase(), b.trim().to_lowercase());
        Ok(if rng.gen_bool(0.5) {
            WordPair::new(a, b)
        } else {
            WordPair::new(b, a)
        })
    }

    pub fn random_pair(&self) -> Result<WordPair, WordServiceError> {
        self.pick(&mut rand::thread_rng())
    }
}

/// Where a new round gets its words from.
#[derive(Clone)]
pub enum WordSource {
    Remote(WordClient),
    Local(WordBank),
}

impl WordSource {
    /// Upstream service when a URL is configured, otherwise the word list
    /// on disk, otherwise the bundled list.
    pub fn from_settings(url: Option<&str>, words_path: &Path) -> Result<Self, WordServiceError> {
        if let Some(url) = url {
            info!("using word service at {}", url);
            return Ok(WordSource::Remote(WordClient::new(url)?));
        }
        let bank = match WordBank::from_path(words_path) {
            Ok(bank) => bank,
            Err(e) => {
                warn!(
                    "word list {} unusable ({}), using bundled words",
                    words_path.display(),
                    e
                );
                WordBank::builtin()
            }
        };
        info!("loaded {} word pairs", bank.len());
        Ok(WordSource::Local(bank))
    }

    pub async fn next_pair(&self) -> Result<WordPair, WordServiceError> {
        match self {
            WordSource::Remote(client) => client.fetch_pair().await,
            WordSource::Local(bank) => bank.random_pair(),
        }
    }

    /// The bank served on this host's own `/pod_krinko/new_words`.
    pub fn bank(&self) -> Option<&WordBank> {
        match self {
            WordSource::Local(bank) => Some(bank),
            WordSource::Remote(_) => None,
        }
    }
}
