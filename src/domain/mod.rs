//! Domain layer: the authentication gate's types and the registration saga

pub mod auth;
pub mod error;
pub mod registration;

pub use error::DomainError;
