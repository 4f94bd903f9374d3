//! Local registration endpoint

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::state::AppState;
use crate::domain::registration::{RegistrationOutcome, RegistrationRequest};

/// `POST /register`
///
/// 200 with a plain confirmation on success, 400 with the violation list,
/// 502 for upstream and compensated failures (the latter confirming
/// rollback), 500 for a failed compensation.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Response {
    match state.registration.register(request).await {
        RegistrationOutcome::Success => {
            (StatusCode::OK, "Registration successful").into_response()
        }
        RegistrationOutcome::ValidationFailure { violations } => {
            (StatusCode::BAD_REQUEST, Json(violations)).into_response()
        }
        RegistrationOutcome::UpstreamFailure { message } => {
            (StatusCode::BAD_GATEWAY, message).into_response()
        }
        RegistrationOutcome::CompensatedFailure { message } => (
            StatusCode::BAD_GATEWAY,
            format!("Registration failed with rollback: {message}"),
        )
            .into_response(),
        RegistrationOutcome::CompensationFailure { user_id, message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!(
                "Registration failed and rollback failed; user profile {user_id} \
                 requires manual reconciliation: {message}"
            ),
        )
            .into_response(),
    }
}
