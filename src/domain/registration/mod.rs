//! Registration saga
//!
//! A two-step distributed write (create user profile, then register
//! credentials) with a compensating delete on partial failure. No shared
//! transaction exists across the two services; consistency is restored by
//! rollback, and a failed rollback is recorded for manual reconciliation.

pub mod clients;
pub mod orchestrator;
pub mod outcome;
pub mod reconciliation;
pub mod request;

pub use clients::{CredentialServiceApi, NewUserProfile, UserRecord, UserServiceApi};
pub use orchestrator::{RegistrationOrchestrator, RetryPolicy};
pub use outcome::RegistrationOutcome;
pub use reconciliation::{OrphanedUserRecord, ReconciliationStore};
pub use request::{RegistrationRequest, violation_messages};
