use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::{models::api::CountRequest, services::setup_service, state::AppState};

pub fn routes(state: AppState) -> Router {
    Router::new()
        // curl http://localhost:8080/api/setup
        .route("/", get(get_setup))
        // curl -X POST -H 'content-type: application/json' -d '{"count":7}' http://localhost:8080/api/setup/players
        .route("/players", post(set_players))
        .route("/spies", post(set_spies))
        .route("/whites", post(set_whites))
        // curl http://localhost:8080/api/setup/scores
        .route("/scores", get(saved_scores))
        .with_state(state)
}

async fn get_setup(State(state): State<AppState>) -> impl IntoResponse {
    Json(setup_service::get_setup(&state).await)
}

async fn saved_scores(State(state): State<AppState>) -> impl IntoResponse {
    Json(setup_service::saved_scores(&state).await)
}

async fn set_players(
    State(state): State<AppState>,
    Json(req): Json<CountRequest>,
) -> impl IntoResponse {
    Json(setup_service::set_player_count(&state, req.count).await)
}

async fn set_spies(
    State(state): State<AppState>,
    Json(req): Json<CountRequest>,
) -> impl IntoResponse {
    Json(setup_service::set_spy_count(&state, req.count).await)
}

async fn set_whites(
    State(state): State<AppState>,
    Json(req): Json<CountRequest>,
) -> impl IntoResponse {
    Json(setup_service::set_white_count(&state, req.count).await)
}
