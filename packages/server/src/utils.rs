pub mod config;
pub mod error;
pub mod test_setup;
pub mod websocket;
