//! Terminal states of one registration attempt

/// Result returned to the caller of the registration saga.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Both remote resources exist and are consistent.
    Success,

    /// The payload violated its constraints; no side effect occurred.
    ValidationFailure { violations: Vec<String> },

    /// User creation failed; nothing was created, so nothing is rolled back.
    UpstreamFailure { message: String },

    /// Credential registration failed and the compensating delete
    /// succeeded. `message` carries the original credential error.
    CompensatedFailure { message: String },

    /// Credential registration failed AND the compensating delete failed:
    /// a profile record is orphaned. Distinct and higher-severity; the
    /// orphan is recorded for manual reconciliation.
    CompensationFailure { user_id: i64, message: String },
}
