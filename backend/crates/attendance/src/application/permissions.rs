//! Permission Acquirer
//!
//! Camera and location readiness, acquired concurrently.

use std::sync::Arc;

use crate::application::location::LocationResolver;
use crate::domain::repository::{Camera, Geolocation};
use crate::domain::value_objects::{CameraStatus, LocationStatus};

/// Readiness of both devices
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionState {
    pub camera: CameraStatus,
    pub location: LocationStatus,
}

impl Default for PermissionState {
    fn default() -> Self {
        Self {
            camera: CameraStatus::Pending,
            location: LocationStatus::Checking,
        }
    }
}

impl PermissionState {
    pub fn is_ready(&self) -> bool {
        self.camera.is_ready() && self.location.is_ready()
    }

    /// First human-readable error, camera before location
    pub fn error(&self) -> Option<&str> {
        match (&self.camera, &self.location) {
            (CameraStatus::Denied(msg), _) => Some(msg.as_str()),
            (_, LocationStatus::Error(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Permission acquirer
pub struct PermissionAcquirer<C, G>
where
    C: Camera,
    G: Geolocation,
{
    camera: Arc<C>,
    locator: Arc<LocationResolver<G>>,
}

impl<C, G> PermissionAcquirer<C, G>
where
    C: Camera,
    G: Geolocation,
{
    pub fn new(camera: Arc<C>, locator: Arc<LocationResolver<G>>) -> Self {
        Self { camera, locator }
    }

    /// Request both devices; neither request waits for the other
    pub async fn acquire(&self) -> PermissionState {
        let (camera, location) = tokio::join!(self.acquire_camera(), self.acquire_location());
        tracing::info!(camera = ?camera, location = ?location, "Permissions acquired");
        PermissionState { camera, location }
    }

    pub async fn acquire_camera(&self) -> CameraStatus {
        match self.camera.request_access().await {
            Ok(()) => CameraStatus::Ready,
            Err(e) => {
                e.log();
                CameraStatus::Denied(e.to_string())
            }
        }
    }

    pub async fn acquire_location(&self) -> LocationStatus {
        match self.locator.resolve_with_retry().await {
            Ok(coordinates) => LocationStatus::Ready {
                accuracy: coordinates.accuracy,
            },
            Err(e) => {
                e.log();
                LocationStatus::Error(e.to_string())
            }
        }
    }

    /// Stop every active video track
    pub fn release(&self) {
        self.camera.stop_tracks();
        tracing::debug!("Camera released");
    }
}
