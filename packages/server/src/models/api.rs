use serde::{Deserialize, Serialize};
use undercover::view::RoundView;
use undercover::{Event, PlayerEntry};

#[derive(Debug, Serialize, Deserialize)]
pub struct CountRequest {
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub players: Vec<PlayerEntry>,
    #[serde(default)]
    pub double_agent: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GuessRequest {
    pub attempt: String,
}

/// Answer to every state-changing game call: what happened and where the
/// table stands now.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransitionResponse {
    pub events: Vec<Event>,
    pub state: RoundView,
}
