//! Capture Use Case
//!
//! The capture state machine:
//!
//! ```text
//! Idle → CheckingToday → AlreadySatisfied
//!                      → Capturing → Succeeded | Failed
//! ```
//!
//! `Capturing` runs AcquireLocation → TakeSnapshot → SubmitRemote →
//! PersistLocal → RefreshLog strictly in order. Nothing is persisted unless
//! the gateway confirmed the submission. Once it has, the day cache is written
//! before the history and a local write error only gets logged.

use std::sync::Arc;

use auth::{EmployeeId, SessionRepository};
use kernel::error::kind::ErrorKind;
use platform::crypto::from_data_url;
use platform::storage::KeyValueStore;
use tokio::sync::watch;

use crate::application::day_cache::DayScopedResultCache;
use crate::application::location::LocationResolver;
use crate::application::store::AttendanceStore;
use crate::domain::entities::{CaptureResult, Submission};
use crate::domain::repository::{AttendanceGateway, Camera, Geolocation, LogQueryService};
use crate::domain::services::Clock;
use crate::error::{AttendanceError, AttendanceResult};

/// Step inside `Capturing`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStep {
    AcquireLocation,
    TakeSnapshot,
    SubmitRemote,
    PersistLocal,
    RefreshLog,
}

/// Observable state of the capture flow
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureState {
    Idle,
    CheckingToday,
    AlreadySatisfied(CaptureResult),
    Capturing(CaptureStep),
    Succeeded(CaptureResult),
    Failed { kind: ErrorKind, message: String },
}

impl CaptureState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CaptureState::AlreadySatisfied(_)
                | CaptureState::Succeeded(_)
                | CaptureState::Failed { .. }
        )
    }
}

/// Outcome of a successful invocation
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    /// Today was already captured; nothing was sent
    AlreadySatisfied(CaptureResult),
    /// A new capture was submitted and persisted
    Captured(CaptureResult),
}

impl CaptureOutcome {
    pub fn result(&self) -> &CaptureResult {
        match self {
            CaptureOutcome::AlreadySatisfied(result) | CaptureOutcome::Captured(result) => result,
        }
    }
}

/// Capture orchestrator
pub struct CaptureOrchestrator<G, C, A, L, K, S>
where
    G: Geolocation,
    C: Camera,
    A: AttendanceGateway,
    L: LogQueryService,
    K: KeyValueStore,
    S: SessionRepository,
{
    locator: Arc<LocationResolver<G>>,
    camera: Arc<C>,
    gateway: Arc<A>,
    log_service: Arc<L>,
    store: Arc<AttendanceStore<K>>,
    cache: DayScopedResultCache<K>,
    session_repo: Arc<S>,
    clock: Arc<dyn Clock>,
    state: watch::Sender<CaptureState>,
}

impl<G, C, A, L, K, S> CaptureOrchestrator<G, C, A, L, K, S>
where
    G: Geolocation,
    C: Camera,
    A: AttendanceGateway,
    L: LogQueryService,
    K: KeyValueStore,
    S: SessionRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        locator: Arc<LocationResolver<G>>,
        camera: Arc<C>,
        gateway: Arc<A>,
        log_service: Arc<L>,
        store: Arc<AttendanceStore<K>>,
        cache: DayScopedResultCache<K>,
        session_repo: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (state, _) = watch::channel(CaptureState::Idle);
        Self {
            locator,
            camera,
            gateway,
            log_service,
            store,
            cache,
            session_repo,
            clock,
            state,
        }
    }

    /// Observe state transitions
    pub fn subscribe(&self) -> watch::Receiver<CaptureState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> CaptureState {
        self.state.borrow().clone()
    }

    pub fn locator(&self) -> &Arc<LocationResolver<G>> {
        &self.locator
    }

    pub fn camera(&self) -> &Arc<C> {
        &self.camera
    }

    fn transition(&self, next: CaptureState) {
        tracing::debug!(state = ?next, "Capture state");
        self.state.send_replace(next);
    }

    /// Run the capture flow once
    pub async fn capture(&self) -> AttendanceResult<CaptureOutcome> {
        match self.run().await {
            Ok(outcome) => {
                match &outcome {
                    CaptureOutcome::AlreadySatisfied(result) => {
                        self.transition(CaptureState::AlreadySatisfied(result.clone()))
                    }
                    CaptureOutcome::Captured(result) => {
                        self.transition(CaptureState::Succeeded(result.clone()))
                    }
                }
                Ok(outcome)
            }
            Err(e) => {
                e.log();
                self.transition(CaptureState::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn run(&self) -> AttendanceResult<CaptureOutcome> {
        self.transition(CaptureState::CheckingToday);
        let employee_id = self.current_employee().await;

        if let Some(employee_id) = &employee_id {
            if let Some(cached) = self.cache.get(employee_id) {
                tracing::info!(
                    employee = %employee_id,
                    captured_at = %cached.timestamp,
                    "Attendance already captured today"
                );
                return Ok(CaptureOutcome::AlreadySatisfied(cached));
            }
        }

        self.transition(CaptureState::Capturing(CaptureStep::AcquireLocation));
        let coordinates = self.locator.resolve_with_retry().await?;

        self.transition(CaptureState::Capturing(CaptureStep::TakeSnapshot));
        let photo = self.camera.snapshot().ok_or(AttendanceError::CaptureFailed)?;

        self.transition(CaptureState::Capturing(CaptureStep::SubmitRemote));
        let employee_id = employee_id.ok_or(AttendanceError::NotAuthenticated)?;
        let (mime, image) = from_data_url(&photo)?;
        let submission = Submission {
            employee_id: employee_id.clone(),
            coordinates,
            image,
            mime,
        };
        let receipt = self.gateway.submit(&submission).await?;

        self.transition(CaptureState::Capturing(CaptureStep::PersistLocal));
        let result = CaptureResult::new(self.clock.now(), coordinates, Some(photo), receipt);
        // The gateway has accepted the check-in; local write failures no longer fail it.
        if let Err(e) = self.cache.put(&employee_id, &result) {
            tracing::error!(error = %e, employee = %employee_id, "Could not save today's capture");
        }
        if let Err(e) = self.store.add_attendance(&result) {
            tracing::warn!(error = %e, "Could not append capture to history");
        }

        tracing::info!(
            employee = %employee_id,
            capture_id = %result.id,
            coordinates = %result.coordinates,
            "Attendance captured"
        );

        self.transition(CaptureState::Capturing(CaptureStep::RefreshLog));
        if let Err(e) = self
            .store
            .fetch_logs(self.log_service.as_ref(), &employee_id)
            .await
        {
            tracing::warn!(error = %e, "Log refresh after capture failed");
        }

        Ok(CaptureOutcome::Captured(result))
    }

    /// Employee of the stored session, if any
    async fn current_employee(&self) -> Option<EmployeeId> {
        match self.session_repo.load().await {
            Ok(session) => session.map(|s| s.employee_id),
            Err(e) => {
                AttendanceError::from(e).log();
                None
            }
        }
    }
}
