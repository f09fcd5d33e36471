pub mod player;
pub mod role;
pub mod round;
pub mod setup;

pub use player::*;
pub use role::*;
pub use round::*;
pub use setup::*;
