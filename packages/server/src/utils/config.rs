use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub struct Config {
    pub bind_addr: String,
    /// Upstream word-pair service. The local word bank is used when unset.
    pub word_service_url: Option<String>,
    pub words_path: PathBuf,
    pub store_path: PathBuf,
    pub cors_origin: String,
}

impl Config {
    fn new() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            word_service_url: env::var("WORD_SERVICE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            words_path: env::var("WORDS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/words.csv")),
            store_path: env::var("STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".data/undercover.json")),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }
}
