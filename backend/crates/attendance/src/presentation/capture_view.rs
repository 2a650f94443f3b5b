//! Capture View
//!
//! View model of the attendance screen. Owns the permission state, the busy
//! flag, the visible error and the success banner. The camera is released
//! on unmount, and on drop if the view was never unmounted.

use std::sync::Arc;

use auth::SessionRepository;
use platform::storage::KeyValueStore;

use crate::application::capture::{CaptureOrchestrator, CaptureOutcome};
use crate::application::permissions::{PermissionAcquirer, PermissionState};
use crate::domain::entities::CaptureResult;
use crate::domain::repository::{AttendanceGateway, Camera, Geolocation, LogQueryService};
use crate::domain::value_objects::LocationStatus;
use crate::error::{AttendanceError, AttendanceResult};

/// Attendance screen view model
pub struct CaptureView<G, C, A, L, K, S>
where
    G: Geolocation,
    C: Camera,
    A: AttendanceGateway,
    L: LogQueryService,
    K: KeyValueStore,
    S: SessionRepository,
{
    orchestrator: Arc<CaptureOrchestrator<G, C, A, L, K, S>>,
    acquirer: PermissionAcquirer<C, G>,
    permissions: PermissionState,
    busy: bool,
    error: Option<String>,
    success: Option<CaptureResult>,
    mounted: bool,
}

impl<G, C, A, L, K, S> CaptureView<G, C, A, L, K, S>
where
    G: Geolocation,
    C: Camera,
    A: AttendanceGateway,
    L: LogQueryService,
    K: KeyValueStore,
    S: SessionRepository,
{
    pub fn new(orchestrator: Arc<CaptureOrchestrator<G, C, A, L, K, S>>) -> Self {
        let acquirer = PermissionAcquirer::new(
            Arc::clone(orchestrator.camera()),
            Arc::clone(orchestrator.locator()),
        );
        Self {
            orchestrator,
            acquirer,
            permissions: PermissionState::default(),
            busy: false,
            error: None,
            success: None,
            mounted: false,
        }
    }

    /// Acquire camera and location
    pub async fn mount(&mut self) {
        self.mounted = true;
        self.permissions = self.acquirer.acquire().await;
        self.error = self.permissions.error().map(str::to_string);
    }

    /// Whether the capture action is enabled
    pub fn is_ready(&self) -> bool {
        self.permissions.is_ready() && self.error.is_none() && !self.busy
    }

    /// Run the capture flow
    ///
    /// A failure leaves location in the error state; `retry` is needed
    /// before the next attempt.
    pub async fn capture(&mut self) -> AttendanceResult<CaptureOutcome> {
        if !self.is_ready() {
            let reason = self
                .error
                .clone()
                .unwrap_or_else(|| "Camera or location is not ready".to_string());
            return Err(AttendanceError::NotReady(reason));
        }

        self.busy = true;
        self.error = None;
        let result = self.orchestrator.capture().await;
        self.busy = false;

        match &result {
            Ok(outcome) => {
                self.permissions.location = LocationStatus::Ready {
                    accuracy: outcome.result().coordinates.accuracy,
                };
                self.success = Some(outcome.result().clone());
            }
            Err(e) => {
                let message = e.to_string();
                self.permissions.location = LocationStatus::Error(message.clone());
                self.error = Some(message);
            }
        }
        result
    }

    /// Re-run acquisition from scratch
    pub async fn retry(&mut self) {
        tracing::info!("Retrying device acquisition");
        self.permissions = PermissionState::default();
        self.error = None;
        self.mount().await;
    }

    /// Release the camera
    pub fn unmount(&mut self) {
        if self.mounted {
            self.acquirer.release();
            self.mounted = false;
        }
    }

    pub fn permissions(&self) -> &PermissionState {
        &self.permissions
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Result shown in the success banner
    pub fn success(&self) -> Option<&CaptureResult> {
        self.success.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

impl<G, C, A, L, K, S> Drop for CaptureView<G, C, A, L, K, S>
where
    G: Geolocation,
    C: Camera,
    A: AttendanceGateway,
    L: LogQueryService,
    K: KeyValueStore,
    S: SessionRepository,
{
    fn drop(&mut self) {
        self.unmount();
    }
}
