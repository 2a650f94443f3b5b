//! Value Objects
//!
//! Immutable values for the capture domain.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A position fix reported by the host
///
/// `accuracy` is informational only: no threshold is ever enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of uncertainty in meters
    #[serde(default)]
    pub accuracy: Option<f64>,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64, accuracy: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            accuracy,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)?;
        if let Some(accuracy) = self.accuracy {
            write!(f, " (±{:.0} m)", accuracy)?;
        }
        Ok(())
    }
}

/// Handle of an active position watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

impl fmt::Display for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "watch-{}", self.0)
    }
}

/// Options passed to the host when starting a watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub enable_high_accuracy: bool,
    /// Host-side timeout for a single fix
    pub timeout: Duration,
    /// Maximum age of a cached fix the host may return
    pub maximum_age: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(8),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Error codes reported through a position watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

/// Camera readiness
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraStatus {
    Pending,
    Ready,
    Denied(String),
}

impl CameraStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CameraStatus::Ready)
    }
}

/// Location readiness
#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    Checking,
    Ready { accuracy: Option<f64> },
    Error(String),
}

impl LocationStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LocationStatus::Ready { .. })
    }
}

/// Status flag stored next to a cached capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    Success,
}

/// Direction of an attendance event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogType {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogType::In => f.write_str("IN"),
            LogType::Out => f.write_str("OUT"),
        }
    }
}

/// Screens of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Attendance,
    Logs,
}

impl Route {
    /// Whether the view at this route owns the camera
    pub fn uses_camera(&self) -> bool {
        matches!(self, Route::Attendance)
    }
}
