//! Error types for the meeple server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing query")]
    MissingQuery,

    #[error("Invalid game id: {0}")]
    InvalidGameId(String),

    #[error("Game not found: {0}")]
    GameNotFound(u64),

    #[error("BGG request failed: {0}")]
    Bgg(#[from] meeple_bgg_client::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Error::MissingQuery | Error::InvalidGameId(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Error::GameNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Error::Bgg(_) | Error::Other(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        // Error bodies are plain text; the web client reads them directly.
        (status, error_message).into_response()
    }
}
