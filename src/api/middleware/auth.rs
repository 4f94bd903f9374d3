//! Authentication gate
//!
//! The single middleware stage deciding whether a request is forwarded and
//! with what principal. Token validity is delegated to the auth service and
//! the decision is fail-closed: a token whose validity cannot be positively
//! confirmed is treated exactly like an invalid one.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::auth::SecurityContext;

/// Evaluate one request.
///
/// Order matters: the cached context and the public-path bypass are checked
/// before the header, and the header before any network call, so cheap
/// rejections never touch the wire.
pub async fn authentication_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(context) = request.extensions().get::<SecurityContext>() {
        // A nested gate invocation within the same request reuses the
        // decision instead of validating again.
        debug!(subject = context.subject(), "reusing established security context");
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();

    if state.public_paths.is_public(&path) {
        debug!(%path, "public path, skipping token validation");
        return next.run(request).await;
    }

    let token = match extract_bearer_token(request.headers()) {
        Ok(token) => token,
        Err(rejection) => {
            warn!(%path, "missing or malformed Authorization header");
            return rejection.into_response();
        }
    };

    match state.token_validator.validate(&token).await {
        Ok(validation) => match validation.subject() {
            Some(subject) => {
                debug!(%path, subject, "token validated");
                let context = SecurityContext::authenticated(subject);
                request.extensions_mut().insert(context);
                next.run(request).await
            }
            None => {
                warn!(%path, "token reported invalid or without a subject");
                invalid_token().into_response()
            }
        },
        Err(e) => {
            // Fail closed.
            warn!(%path, error = %e, "token validation call failed");
            invalid_token().into_response()
        }
    }
}

fn invalid_token() -> ApiError {
    ApiError::unauthorized("Invalid bearer token").with_code("invalid_token")
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// Absence, a non-Bearer scheme, a non-UTF8 value, or an empty token all
/// reject with 401 before any network call.
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                let token = token.trim();
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            }
        }
    }

    Err(ApiError::unauthorized("Missing or invalid Authorization header")
        .with_code("missing_authorization"))
}
