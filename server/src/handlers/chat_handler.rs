use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::AppError;
use crate::models::payloads::{ChatRequest, ChatResponse};
use crate::state::AppState;

/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match payload {
        Ok(Json(ChatRequest {
            message: Some(message),
        })) => message,
        Ok(_) => {
            tracing::error!("chat request without message");
            return Err(AppError::BadChatRequest("missing message".to_string()));
        }
        Err(rejection) => {
            tracing::error!(error = %rejection, "unreadable chat request");
            return Err(AppError::BadChatRequest(rejection.body_text()));
        }
    };

    let response = state.chat.complete(&message).await.map_err(|e| {
        tracing::error!(error = %e, "chat completion failed");
        AppError::ChatFailed(e)
    })?;

    Ok(Json(ChatResponse { response }))
}
