use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::{state::AppState, utils::websocket};

pub fn routes(state: AppState) -> Router {
    Router::new()
        // curl http://localhost:8080/pod_krinko/new_words
        .route("/pod_krinko/new_words", get(new_words))
        // websocat ws://localhost:8080/ws
        .route("/ws", get(websocket::handler))
        .with_state(state)
}

async fn new_words(State(state): State<AppState>) -> impl IntoResponse {
    let Some(bank) = state.words.bank() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "this host uses an upstream word service" })),
        );
    };
    match bank.random_pair() {
        Ok(pair) => (StatusCode::OK, Json(json!([pair.villager, pair.spy]))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        ),
    }
}
