use dotenvy::dotenv;
use std::sync::Once;

use crate::models::config::DebugConfig;
use crate::services::store::LocalStore;
use crate::services::word_service::{WordBank, WordSource};
use crate::state::AppState;

static INIT: Once = Once::new();

pub const TEST_MISS_DELAY_MS: u64 = 50;

pub fn setup_test_env() {
    INIT.call_once(|| {
        dotenv().ok();
    });
}

/// Seeded, in-memory state with live roles visible so tests can steer the
/// game.
pub fn test_state_with(words: WordSource) -> AppState {
    setup_test_env();
    let debug_config = DebugConfig {
        enabled: true,
        show_player_roles: true,
        rng_seed: Some(7),
        white_miss_delay_ms: TEST_MISS_DELAY_MS,
    };
    AppState::new(debug_config, words, LocalStore::in_memory())
}

pub fn test_state() -> AppState {
    test_state_with(WordSource::Local(WordBank::parse("a;b\napple;pear\n")))
}
