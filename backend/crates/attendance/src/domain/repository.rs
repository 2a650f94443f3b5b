//! Port Traits
//!
//! Interfaces for the host devices and the remote services.
//! Implementations are in the infrastructure layer.

use auth::EmployeeId;
use tokio::sync::mpsc;

use crate::domain::entities::{AttendanceLog, Submission, SubmissionReceipt};
use crate::domain::value_objects::{Coordinates, PositionError, WatchId, WatchOptions};
use crate::error::AttendanceResult;

/// An active position watch
///
/// Every fix or error the host reports arrives on `updates` until the watch
/// is cleared.
#[derive(Debug)]
pub struct PositionWatch {
    pub id: WatchId,
    pub updates: mpsc::UnboundedReceiver<Result<Coordinates, PositionError>>,
}

/// Host geolocation capability
pub trait Geolocation: Send + Sync {
    /// Start a continuous watch
    ///
    /// Fails immediately when the host has no geolocation support.
    fn watch_position(&self, options: &WatchOptions) -> AttendanceResult<PositionWatch>;

    /// Stop a watch started by [`Geolocation::watch_position`]
    fn clear_watch(&self, id: WatchId);
}

/// Host camera capability
#[trait_variant::make(Camera: Send)]
pub trait LocalCamera {
    /// Ask for access and open the video stream
    async fn request_access(&self) -> AttendanceResult<()>;

    /// Encode the current frame as a `data:` URL
    ///
    /// `None` when no live video source is available.
    fn snapshot(&self) -> Option<String>;

    /// Release every active video track
    fn stop_tracks(&self);
}

/// Remote attendance gateway
#[trait_variant::make(AttendanceGateway: Send)]
pub trait LocalAttendanceGateway {
    /// Submit a geotagged frame (check-in)
    async fn submit(&self, submission: &Submission) -> AttendanceResult<SubmissionReceipt>;

    /// Record a checkout
    async fn checkout(
        &self,
        employee_id: &EmployeeId,
        coordinates: Option<Coordinates>,
    ) -> AttendanceResult<SubmissionReceipt>;
}

/// Log query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct LogQuery {
    pub employee: EmployeeId,
    /// `None` means every status
    pub status: Option<String>,
    pub limit: u32,
}

/// Remote log query service
#[trait_variant::make(LogQueryService: Send)]
pub trait LocalLogQueryService {
    async fn fetch_logs(&self, query: &LogQuery) -> AttendanceResult<Vec<AttendanceLog>>;
}
