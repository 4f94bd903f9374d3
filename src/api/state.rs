//! Application state for shared services

use std::sync::Arc;

use crate::domain::auth::{PublicPaths, TokenValidator};
use crate::domain::registration::RegistrationOrchestrator;

/// State shared across all requests.
///
/// Everything here is immutable and long-lived; concurrent requests share
/// it read-only, so no locking is involved.
#[derive(Clone)]
pub struct AppState {
    pub token_validator: Arc<dyn TokenValidator>,
    pub registration: Arc<RegistrationOrchestrator>,
    pub public_paths: Arc<PublicPaths>,
}
