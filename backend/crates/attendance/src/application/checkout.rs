//! Checkout Use Case
//!
//! Records a checkout and clears the day-scoped cache, handing control
//! back to the login screen.

use std::sync::Arc;

use auth::SessionRepository;
use platform::storage::KeyValueStore;

use crate::application::day_cache::DayScopedResultCache;
use crate::domain::entities::SubmissionReceipt;
use crate::domain::repository::AttendanceGateway;
use crate::domain::value_objects::{Coordinates, Route};
use crate::error::{AttendanceError, AttendanceResult};

/// Output of a successful checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutput {
    pub receipt: SubmissionReceipt,
    /// Where the client goes next
    pub next: Route,
}

/// Checkout use case
pub struct CheckoutUseCase<A, K, S>
where
    A: AttendanceGateway,
    K: KeyValueStore,
    S: SessionRepository,
{
    gateway: Arc<A>,
    cache: DayScopedResultCache<K>,
    session_repo: Arc<S>,
}

impl<A, K, S> CheckoutUseCase<A, K, S>
where
    A: AttendanceGateway,
    K: KeyValueStore,
    S: SessionRepository,
{
    pub fn new(gateway: Arc<A>, cache: DayScopedResultCache<K>, session_repo: Arc<S>) -> Self {
        Self {
            gateway,
            cache,
            session_repo,
        }
    }

    /// Check out; the cache is cleared only after the gateway accepted
    pub async fn execute(&self, coordinates: Option<Coordinates>) -> AttendanceResult<CheckoutOutput> {
        let session = self
            .session_repo
            .load()
            .await?
            .ok_or(AttendanceError::NotAuthenticated)?;

        let receipt = self
            .gateway
            .checkout(&session.employee_id, coordinates)
            .await
            .inspect_err(|e| e.log())?;

        self.cache.clear()?;

        tracing::info!(employee = %session.employee_id, "Checked out");

        Ok(CheckoutOutput {
            receipt,
            next: Route::Login,
        })
    }
}
