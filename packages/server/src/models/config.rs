use std::env;

pub const DEFAULT_WHITE_MISS_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    // expose live roles in the state view
    pub show_player_roles: bool,
    // fixed seed for role dealing, first clue and double agent
    pub rng_seed: Option<u64>,
    // pause after a wrong White guess before discussion resumes
    pub white_miss_delay_ms: u64,
}

impl DebugConfig {
    pub fn from_env() -> Self {
        let enabled = env::var("DEBUG_ENABLED")
            .map(|v| v == "true")
            .unwrap_or_else(|_| cfg!(debug_assertions));
        let show_player_roles = env::var("DEBUG_SHOW_PLAYER_ROLES")
            .map(|v| v == "true")
            .unwrap_or(false);
        let rng_seed = env::var("DEBUG_RNG_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok());
        let white_miss_delay_ms = env::var("WHITE_MISS_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_WHITE_MISS_DELAY_MS);

        Self {
            enabled,
            show_player_roles,
            rng_seed,
            white_miss_delay_ms,
        }
    }
}
