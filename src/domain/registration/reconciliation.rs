//! Record-keeping for broken compensations

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::DomainError;

/// A user profile that survived a failed rollback and needs manual cleanup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanedUserRecord {
    pub user_id: i64,
    pub email: String,
    pub reason: String,
    pub recorded_at: DateTime<Utc>,
}

impl OrphanedUserRecord {
    pub fn new(user_id: i64, email: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            reason: reason.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Durable sink for orphaned-user records (for mocking)
///
/// A transient error response is not enough to surface a consistency
/// incident; the orchestrator records every failed compensation here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReconciliationStore: Send + Sync {
    async fn record_orphaned_user(&self, record: OrphanedUserRecord) -> Result<(), DomainError>;
}
