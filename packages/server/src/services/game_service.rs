use std::time::Duration;

use tracing::{info, warn};
use undercover::scoreboard::{standings, Standings};
use undercover::view::RoundView;
use undercover::{validate_names, GameError, Phase, Player, SetupForm, WordCard};

use crate::{
    models::api::{StartGameRequest, TransitionResponse},
    state::{AppState, Table},
    utils::error::ApiError,
};

fn view(state: &AppState, table: &Table) -> RoundView {
    RoundView::project(&table.session, state.debug_config.show_player_roles)
}

/// Setup and players to persist once a round has ended.
fn finished_round(table: &Table) -> Option<(SetupForm, Vec<Player>)> {
    (table.session.phase() == Some(Phase::RoundOver))
        .then(|| (table.setup.clone(), table.session.players.clone()))
}

/// Writes the store on the blocking pool, after the table lock is released.
async fn remember(state: &AppState, setup: SetupForm, players: Vec<Player>) {
    let store = state.store.clone();
    let written = tokio::task::spawn_blocking(move || {
        store.blocking_lock().remember(&setup, &players);
    })
    .await;
    if let Err(e) = written {
        warn!("store write task failed: {}", e);
    }
}

/// Validates the names, fetches a word pair and deals a new round. A failed
/// validation or fetch leaves the setup and any previous round untouched.
pub async fn start_game(
    state: AppState,
    req: StartGameRequest,
) -> Result<TransitionResponse, ApiError> {
    let mut setup = {
        let table = state.table.lock().await;
        let mut setup = table.setup.clone();
        if req.players.len() != setup.player_count {
            return Err(GameError::PlayerCountMismatch {
                expected: setup.player_count,
                actual: req.players.len(),
            }
            .into());
        }
        validate_names(&req.players)?;
        setup.entries = req.players;
        setup
    };

    let words = state.words.next_pair().await.map_err(|e| {
        warn!("word pair fetch failed, round not started: {}", e);
        e
    })?;

    let (events, response_state, players) = {
        let mut table = state.table.lock().await;
        let mut rng = state.rng.lock().await;
        // counts may have moved while the fetch was in flight
        setup.player_count = table.setup.player_count;
        setup.spy_count = table.setup.spy_count;
        setup.white_count = table.setup.white_count;

        let round_id = table
            .session
            .start_round(&setup, req.double_agent, words, &mut *rng)?
            .id;
        table.setup = setup.clone();
        let events = vec![undercover::Event::RoundStarted { round_id }];
        (events, view(&state, &table), table.session.players.clone())
    };

    remember(&state, setup, players).await;
    state.broadcast_events(&events);
    Ok(TransitionResponse {
        events,
        state: response_state,
    })
}

pub async fn reveal_word(state: AppState, player: usize) -> Result<WordCard, ApiError> {
    let (card, events) = {
        let mut table = state.table.lock().await;
        let mut rng = state.rng.lock().await;
        table.session.reveal_word_to(player, &mut *rng)?
    };
    state.broadcast_events(&events);
    Ok(card)
}

pub async fn eliminate(state: AppState, player: usize) -> Result<TransitionResponse, ApiError> {
    let (events, response_state, finished) = {
        let mut table = state.table.lock().await;
        let events = table.session.eliminate(player)?;
        (events, view(&state, &table), finished_round(&table))
    };
    if let Some((setup, players)) = finished {
        remember(&state, setup, players).await;
    }
    state.broadcast_events(&events);
    Ok(TransitionResponse {
        events,
        state: response_state,
    })
}

pub async fn guess_white_word(
    state: AppState,
    attempt: &str,
) -> Result<TransitionResponse, ApiError> {
    let (events, response_state, pause, finished) = {
        let mut table = state.table.lock().await;
        let events = table.session.guess_white_word(attempt)?;
        let pause = match table.session.round() {
            Some(round) if round.phase == Phase::WhiteGuessedWrong => Some(round.id),
            _ => None,
        };
        (events, view(&state, &table), pause, finished_round(&table))
    };

    if let Some((setup, players)) = finished {
        remember(&state, setup, players).await;
    }

    if let Some(round_id) = pause {
        schedule_resume(state.clone(), round_id);
    }
    state.broadcast_events(&events);
    Ok(TransitionResponse {
        events,
        state: response_state,
    })
}

/// Ends the pause after a wrong White guess. The round id guards against a
/// new round having started in the meantime.
fn schedule_resume(state: AppState, round_id: u64) {
    let delay = Duration::from_millis(state.debug_config.white_miss_delay_ms);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let events = state
            .table
            .lock()
            .await
            .session
            .resume_after_missed_guess(round_id);
        if events.is_empty() {
            info!("stale resume for round {} ignored", round_id);
        }
        state.broadcast_events(&events);
    });
}

pub async fn get_game_state(state: AppState) -> RoundView {
    let table = state.table.lock().await;
    view(&state, &table)
}

pub async fn get_results(state: AppState) -> Standings {
    standings(&state.table.lock().await.session)
}

/// Back to the setup screen. Names stay on the form, players and scores go.
pub async fn return_to_setup(state: AppState) -> SetupForm {
    let setup = {
        let mut table = state.table.lock().await;
        table.session.return_to_setup();
        table.setup.clone()
    };
    info!("returned to setup");
    state.broadcast_setup_change(&setup);
    setup
}
