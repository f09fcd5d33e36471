use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use undercover::GameError;

use crate::services::word_service::WordServiceError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("could not get a word pair: {0}")]
    Words(#[from] WordServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Game(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Game(GameError::UnknownPlayer(_)) => StatusCode::NOT_FOUND,
            ApiError::Game(_) => StatusCode::CONFLICT,
            ApiError::Words(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
