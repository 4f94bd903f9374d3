//! Outbound integrations and process-level plumbing

pub mod auth_service;
pub mod logging;
pub mod reconciliation;
pub(crate) mod upstream;
pub mod user_service;
