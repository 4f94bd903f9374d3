//! Authentication domain types
//!
//! The gateway never inspects tokens itself; validity is delegated to the
//! auth service through the [`TokenValidator`] seam.

pub mod context;
pub mod public_paths;
pub mod validator;

pub use context::{AUTHORITY_USER, SecurityContext};
pub use public_paths::PublicPaths;
pub use validator::{TokenValidation, TokenValidator};
