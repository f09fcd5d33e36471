pub mod game_service;
pub mod setup_service;
pub mod store;
pub mod word_service;
