use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::application::services::{RegistrationError, RegistrationRequest};
use crate::presentation::state::AppState;

use super::ErrorDetail;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// `POST /api/register` — duplicate email/phone maps to 400, any other
/// persistence failure to 500.
#[tracing::instrument(skip(state, request), fields(email = %request.email))]
pub async fn register_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<RegisterRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let result = state
        .registration_service
        .register(RegistrationRequest {
            full_name: request.full_name,
            phone: request.phone,
            email: request.email,
            password: request.password,
        })
        .await;

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(RegisterResponse {
                message: "User registered successfully".to_string(),
            }),
        )
            .into_response(),
        Err(RegistrationError::DuplicateUser) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorDetail::new(
                RegistrationError::DuplicateUser.to_string(),
            )),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "User registration failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail::new(e.to_string())),
            )
                .into_response()
        }
    }
}
