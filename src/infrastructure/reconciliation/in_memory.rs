//! In-memory reconciliation store
//!
//! Holds orphaned-user records for the lifetime of the process. The trait
//! seam is where a durable backend would plug in.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::registration::{OrphanedUserRecord, ReconciliationStore};

#[derive(Debug, Default)]
pub struct InMemoryReconciliationStore {
    records: RwLock<Vec<OrphanedUserRecord>>,
}

impl InMemoryReconciliationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records awaiting manual cleanup.
    pub fn pending(&self) -> Vec<OrphanedUserRecord> {
        self.records
            .read()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReconciliationStore for InMemoryReconciliationStore {
    async fn record_orphaned_user(&self, record: OrphanedUserRecord) -> Result<(), DomainError> {
        self.records
            .write()
            .map_err(|_| DomainError::internal("reconciliation store lock poisoned"))?
            .push(record);
        Ok(())
    }
}
