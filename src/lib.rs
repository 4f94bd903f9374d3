//! API gateway security core
//!
//! Fronts independently deployed user and auth services with:
//! - an authentication gate that delegates bearer-token validation to the
//!   auth service and attaches a per-request principal (fail-closed)
//! - a registration orchestrator running the create-profile then
//!   register-credentials saga, with a compensating delete on partial
//!   failure

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::auth::PublicPaths;
use domain::registration::{RegistrationOrchestrator, RetryPolicy};
use infrastructure::auth_service::AuthServiceClient;
use infrastructure::reconciliation::InMemoryReconciliationStore;
use infrastructure::user_service::UserServiceClient;

/// Create the application state with all outbound clients initialized.
///
/// The auth service client serves double duty: it is both the token
/// validator behind the gate and the credential registrar inside the saga.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let timeout = config.upstream.request_timeout();

    let auth_client = Arc::new(AuthServiceClient::new(
        config.upstream.auth_service_url.clone(),
        timeout,
    )?);
    let user_client = Arc::new(UserServiceClient::new(
        config.upstream.user_service_url.clone(),
        timeout,
    )?);
    let reconciliation = Arc::new(InMemoryReconciliationStore::new());

    let retry = RetryPolicy {
        max_attempts: config.gateway.retry.max_attempts,
        base_delay: Duration::from_millis(config.gateway.retry.base_delay_ms),
    };
    let registration = RegistrationOrchestrator::new(
        user_client,
        auth_client.clone(),
        reconciliation,
        retry,
    );

    Ok(AppState {
        token_validator: auth_client,
        registration: Arc::new(registration),
        public_paths: Arc::new(PublicPaths::new(config.gateway.public_paths.clone())),
    })
}
