use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use request::ChatRequest;
use response::ChatResponse;
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use crate::error::AppError;

pub async fn chat_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "Received chat request with message of {} bytes",
        payload.message.len()
    );

    let response = state.gateway.respond(&payload.message).await?;

    Ok((StatusCode::OK, Json(ChatResponse::new(response))))
}
