//! The registration saga coordinator

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use super::clients::{CredentialServiceApi, NewUserProfile, UserServiceApi};
use super::outcome::RegistrationOutcome;
use super::reconciliation::{OrphanedUserRecord, ReconciliationStore};
use super::request::{RegistrationRequest, violation_messages};
use crate::domain::DomainError;

/// Bounded retry for transient upstream failures.
///
/// Delays grow exponentially from `base_delay`; permanent failures abort
/// on the first attempt.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

/// Coordinates the two-step registration write.
///
/// Strictly sequential: credentials are registered only after the profile
/// create is confirmed, and the compensating delete runs only after
/// credential registration is confirmed failed.
pub struct RegistrationOrchestrator {
    users: Arc<dyn UserServiceApi>,
    credentials: Arc<dyn CredentialServiceApi>,
    reconciliation: Arc<dyn ReconciliationStore>,
    retry: RetryPolicy,
}

impl RegistrationOrchestrator {
    pub fn new(
        users: Arc<dyn UserServiceApi>,
        credentials: Arc<dyn CredentialServiceApi>,
        reconciliation: Arc<dyn ReconciliationStore>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            users,
            credentials,
            reconciliation,
            retry,
        }
    }

    /// Run one registration attempt to a terminal outcome.
    pub async fn register(&self, request: RegistrationRequest) -> RegistrationOutcome {
        if let Err(errors) = request.validate() {
            return RegistrationOutcome::ValidationFailure {
                violations: violation_messages(&errors),
            };
        }

        let profile = NewUserProfile::from_registration(&request);
        // One key per saga: retried creates must land on the same profile.
        let idempotency_key = Uuid::new_v4().to_string();

        let user = match self
            .with_retry("create user", || {
                self.users
                    .create_user(profile.clone(), idempotency_key.clone())
            })
            .await
        {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "user creation failed, aborting registration");
                return RegistrationOutcome::UpstreamFailure {
                    message: e.to_string(),
                };
            }
        };

        info!(user_id = user.id, "user profile created, registering credentials");

        let credential_error = match self
            .with_retry("register credentials", || {
                self.credentials
                    .register_credentials(request.email.clone(), request.password.clone())
            })
            .await
        {
            Ok(()) => {
                info!(user_id = user.id, "registration complete");
                return RegistrationOutcome::Success;
            }
            Err(e) => e,
        };

        warn!(
            user_id = user.id,
            error = %credential_error,
            "credential registration failed, rolling back user profile"
        );

        match self
            .with_retry("delete user", || self.users.delete_user(user.id))
            .await
        {
            Ok(()) => RegistrationOutcome::CompensatedFailure {
                message: credential_error.to_string(),
            },
            Err(delete_error) => {
                error!(
                    user_id = user.id,
                    error = %delete_error,
                    "compensating delete failed, user profile orphaned"
                );

                let record = OrphanedUserRecord::new(
                    user.id,
                    request.email.clone(),
                    format!(
                        "credential registration failed ({credential_error}); \
                         compensating delete failed ({delete_error})"
                    ),
                );
                if let Err(store_error) = self.reconciliation.record_orphaned_user(record).await {
                    error!(
                        user_id = user.id,
                        error = %store_error,
                        "failed to record orphaned user for reconciliation"
                    );
                }

                RegistrationOutcome::CompensationFailure {
                    user_id: user.id,
                    message: credential_error.to_string(),
                }
            }
        }
    }

    async fn with_retry<T, F, Fut>(&self, operation: &str, call: F) -> Result<T, DomainError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.retry.max_attempts => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "transient upstream failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
