use crate::state::AppState;
use axum::Router;

mod game;
mod setup;
mod words;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .nest("/api/setup", setup::routes(state.clone()))
        .nest("/api/game", game::routes(state.clone()))
        .merge(words::routes(state))
}
