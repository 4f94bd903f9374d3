use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::middleware::auth::authentication_gate;
use super::state::AppState;
use super::{health, registration};

/// Create the gateway router with only the local endpoints.
pub fn create_router(state: AppState) -> Router {
    create_router_with_downstream(state, Router::new())
}

/// Create the gateway router and merge an externally supplied downstream
/// router behind the authentication gate.
///
/// The path-to-backend routing table is not this crate's concern; whoever
/// owns it hands over a ready-made `Router` and every route in it gets the
/// same gate treatment as the local endpoints.
pub fn create_router_with_downstream(state: AppState, downstream: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/register", post(registration::register))
        .merge(downstream)
        .layer(from_fn_with_state(state.clone(), authentication_gate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
