//! Shared response mapping for the upstream service clients

use crate::domain::DomainError;

/// Pass a successful response through; map everything else into the
/// upstream taxonomy, classifying 5xx as transient and 4xx as permanent.
pub(crate) async fn ok_or_upstream(
    service: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DomainError::upstream(
        service,
        format!("HTTP {status}: {body}"),
        status.is_server_error(),
    ))
}

/// Strip a trailing slash so URL formatting stays predictable.
pub(crate) fn normalize_base_url(base_url: impl Into<String>) -> String {
    let mut base_url = base_url.into();
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}
