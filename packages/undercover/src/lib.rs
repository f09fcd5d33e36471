pub mod engine;
pub mod error;
pub mod models;
pub mod scoreboard;
pub mod view;

pub use engine::*;
pub use error::*;
pub use models::*;
