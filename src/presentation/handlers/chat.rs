use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::ErrorDetail;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub document: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// `POST /api/chat` — follow-up question over previously extracted document
/// text. The document is re-submitted on every request; no session state.
#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<L>(
    State(state): State<AppState<L>>,
    Form(request): Form<ChatRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing chat question");

    match state
        .analysis_service
        .answer_question(&request.document, &request.question)
        .await
    {
        Ok(answer) => (StatusCode::OK, Json(ChatResponse { answer })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Chat completion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail::new(e.to_string())),
            )
                .into_response()
        }
    }
}
