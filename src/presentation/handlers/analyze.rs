use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::domain::{AnalysisResult, Document};
use crate::presentation::state::AppState;

use super::ErrorDetail;

#[derive(Serialize)]
pub struct AnalysisResponse {
    pub explanation: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk: i32,
    pub full_text: String,
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            explanation: result.explanation,
            summary: result.summary,
            key_points: result.key_points,
            risks: result.risks,
            recommendations: result.recommendations,
            risk: result.risk,
            full_text: result.full_text,
        }
    }
}

/// `POST /api/analyze-document` — multipart file upload. Extraction and
/// upstream failures both map to 400 carrying the error message.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_document_handler<L>(
    State(state): State<AppState<L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Analysis request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail::new("No file uploaded")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail::new(format!("Failed to read multipart: {}", e))),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail::new(format!("Failed to read file: {}", e))),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let document = Document::new(filename, data.len() as u64);

    match state.analysis_service.analyze(&data, &document).await {
        Ok(result) => (StatusCode::OK, Json(AnalysisResponse::from(result))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Document analysis failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail::new(e.to_string())),
            )
                .into_response()
        }
    }
}
