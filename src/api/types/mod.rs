//! HTTP-facing types

pub mod error;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
