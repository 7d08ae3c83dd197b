use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blog_summarizer::SummarizerError;

use crate::models::payloads::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("postgres error: {0}")]
    Postgres(#[from] sqlx::Error),

    #[error("row store request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("row store rejected insert: {0}")]
    Rejected(String),
}

/// Anything that can go wrong after validation in `/api/process`.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Summarizer(#[from] SummarizerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(&'static str),

    #[error("bad chat request: {0}")]
    BadChatRequest(String),

    #[error("chat failed: {0}")]
    ChatFailed(#[source] SummarizerError),

    #[error("processing failed: {0}")]
    ProcessingFailed(#[source] ProcessError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // causes are logged by the handlers; callers only see generic messages
        let (status, message) = match self {
            AppError::MissingInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadChatRequest(_) | AppError::ChatFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to get response")
            }
            AppError::ProcessingFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Processing failed"),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
