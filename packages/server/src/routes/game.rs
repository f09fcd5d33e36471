use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{
    models::api::{GuessRequest, StartGameRequest},
    services::game_service,
    state::AppState,
    utils::error::ApiError,
};

pub fn routes(state: AppState) -> Router {
    Router::new()
        // round lifecycle
        .route("/start", post(start_game))
        .route("/setup", post(return_to_setup))
        .route("/state", get(get_game_state))
        .route("/results", get(get_results))
        // player actions
        .route("/reveal/:player", post(reveal_word))
        .route("/eliminate/:player", post(eliminate))
        .route("/guess", post(guess))
        .with_state(state)
}

async fn start_game(
    State(state): State<AppState>,
    Json(req): Json<StartGameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(game_service::start_game(state, req).await?))
}

async fn reveal_word(
    State(state): State<AppState>,
    Path(player): Path<usize>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(game_service::reveal_word(state, player).await?))
}

async fn eliminate(
    State(state): State<AppState>,
    Path(player): Path<usize>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(game_service::eliminate(state, player).await?))
}

async fn guess(
    State(state): State<AppState>,
    Json(req): Json<GuessRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(
        game_service::guess_white_word(state, &req.attempt).await?,
    ))
}

async fn get_game_state(State(state): State<AppState>) -> impl IntoResponse {
    Json(game_service::get_game_state(state).await)
}

async fn get_results(State(state): State<AppState>) -> impl IntoResponse {
    Json(game_service::get_results(state).await)
}

async fn return_to_setup(State(state): State<AppState>) -> impl IntoResponse {
    Json(game_service::return_to_setup(state).await)
}
