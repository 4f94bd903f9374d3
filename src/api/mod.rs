//! HTTP surface of the gateway

pub mod health;
pub mod middleware;
pub mod registration;
pub mod router;
pub mod state;
pub mod types;
