//! Attendance Error Types
//!
//! This module provides capture-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::HttpError;
use platform::crypto::DataUrlError;
use platform::storage::StorageError;
use thiserror::Error;

use crate::domain::value_objects::PositionError;

/// Attendance-specific result type alias
pub type AttendanceResult<T> = Result<T, AttendanceError>;

/// Terminal message once every location attempt failed
pub const LOCATION_UNAVAILABLE_MESSAGE: &str =
    "Could not get your location. Please try again or check your device/location settings.";

/// Fallback when a check-in fails without a server message
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to mark attendance";

/// Fallback when a checkout fails without a server message
pub const CHECKOUT_FAILED_MESSAGE: &str = "Checkout failed. Please try again.";

/// Message stored in the log state when a refresh fails
pub const LOGS_FAILED_MESSAGE: &str = "Failed to fetch attendance logs.";

/// Attendance-specific error variants
#[derive(Debug, Error)]
pub enum AttendanceError {
    /// Camera permission refused
    #[error("Camera access denied. Please enable camera permissions in your browser settings")]
    CameraDenied,

    /// Camera present but unusable
    #[error("Failed to access camera: {0}")]
    CameraUnavailable(String),

    /// Host has no geolocation capability
    #[error("Location services are not supported in your browser")]
    LocationUnsupported,

    /// Location permission refused
    #[error("Location permission denied")]
    LocationDenied,

    /// Host could not produce a fix
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// No fix before the deadline
    #[error("Location timeout")]
    LocationTimeout,

    /// Retry budget spent
    #[error("{}", LOCATION_UNAVAILABLE_MESSAGE)]
    LocationExhausted { attempts: u32, last: ErrorKind },

    /// No frame could be produced
    #[error("capture failed")]
    CaptureFailed,

    /// Frame produced but not decodable
    #[error("capture failed")]
    InvalidFrame(#[from] DataUrlError),

    /// Capture requested while a device is not ready
    #[error("{0}")]
    NotReady(String),

    /// No employee identity in the session
    #[error("not authenticated")]
    NotAuthenticated,

    /// Gateway or log service failure; server message surfaced verbatim
    #[error("{message}")]
    Gateway { source: HttpError, message: String },

    /// Session lookup failed
    #[error(transparent)]
    Session(AuthError),

    /// Cached or persisted state unreadable
    #[error("Stored attendance state is corrupt: {0}")]
    CorruptState(#[from] serde_json::Error),

    /// Local storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AttendanceError {
    /// Wrap an HTTP error with the message to show when the server gave none
    pub fn gateway(source: HttpError, fallback: &'static str) -> Self {
        let message = source.server_message().unwrap_or(fallback).to_string();
        AttendanceError::Gateway { source, message }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AttendanceError::CameraDenied | AttendanceError::LocationDenied => {
                ErrorKind::PermissionDenied
            }
            AttendanceError::LocationTimeout => ErrorKind::Timeout,
            AttendanceError::LocationExhausted { last, .. } => *last,
            AttendanceError::CameraUnavailable(_)
            | AttendanceError::LocationUnsupported
            | AttendanceError::LocationUnavailable(_)
            | AttendanceError::CaptureFailed
            | AttendanceError::InvalidFrame(_)
            | AttendanceError::NotReady(_) => ErrorKind::Device,
            AttendanceError::NotAuthenticated => ErrorKind::Unauthenticated,
            AttendanceError::Gateway { source, .. } => match source.status() {
                Some(status) => ErrorKind::from_status(status),
                None => match source {
                    HttpError::Decode(_) => ErrorKind::Parse,
                    _ if source.is_timeout() => ErrorKind::Timeout,
                    _ => ErrorKind::Network,
                },
            },
            AttendanceError::Session(e) => e.kind(),
            AttendanceError::CorruptState(_) => ErrorKind::Parse,
            AttendanceError::Storage(_) => ErrorKind::Storage,
            AttendanceError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether a fresh acquisition (retry) can clear this error
    pub fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AttendanceError::Storage(e) => {
                tracing::error!(error = %e, "Attendance storage error");
            }
            AttendanceError::Internal(msg) => {
                tracing::error!(message = %msg, "Attendance internal error");
            }
            AttendanceError::CorruptState(e) => {
                tracing::warn!(error = %e, "Stored attendance state is corrupt");
            }
            AttendanceError::Gateway { source, .. } => {
                tracing::warn!(error = %source, status = ?source.status(), "Gateway request failed");
            }
            AttendanceError::LocationExhausted { attempts, last } => {
                tracing::warn!(attempts, last = %last, "Location attempts exhausted");
            }
            _ => {
                tracing::debug!(error = %self, kind = %self.kind(), "Attendance error");
            }
        }
    }
}

impl From<PositionError> for AttendanceError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::PermissionDenied => AttendanceError::LocationDenied,
            PositionError::PositionUnavailable => {
                AttendanceError::LocationUnavailable("position unavailable".to_string())
            }
            PositionError::Timeout => AttendanceError::LocationTimeout,
        }
    }
}

impl From<AuthError> for AttendanceError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthenticated => AttendanceError::NotAuthenticated,
            other => AttendanceError::Session(other),
        }
    }
}

impl From<AttendanceError> for AppError {
    fn from(err: AttendanceError) -> Self {
        err.log();
        let app = AppError::new(err.kind(), err.to_string());
        let app = match &err {
            AttendanceError::NotAuthenticated => app.with_action("Run `attendance login` to sign in"),
            AttendanceError::LocationUnsupported | AttendanceError::CameraDenied => {
                app.with_action("Check the device settings, then retry")
            }
            e if e.is_recoverable() => app.with_action("Retry the command"),
            _ => app,
        };
        app.with_source(err)
    }
}
