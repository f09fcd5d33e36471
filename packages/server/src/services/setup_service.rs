use undercover::SetupForm;

use crate::services::store::StoredScore;
use crate::state::AppState;

pub async fn get_setup(state: &AppState) -> SetupForm {
    state.table.lock().await.setup.clone()
}

pub async fn saved_scores(state: &AppState) -> Vec<StoredScore> {
    state.store.lock().await.saved_scores()
}

async fn update_setup(state: &AppState, change: impl FnOnce(&mut SetupForm)) -> SetupForm {
    let setup = {
        let mut table = state.table.lock().await;
        change(&mut table.setup);
        table.setup.clone()
    };
    state.broadcast_setup_change(&setup);
    setup
}

pub async fn set_player_count(state: &AppState, count: usize) -> SetupForm {
    update_setup(state, |setup| setup.set_player_count(count)).await
}

pub async fn set_spy_count(state: &AppState, count: usize) -> SetupForm {
    update_setup(state, |setup| setup.set_spy_count(count)).await
}

pub async fn set_white_count(state: &AppState, count: usize) -> SetupForm {
    update_setup(state, |setup| setup.set_white_count(count)).await
}
