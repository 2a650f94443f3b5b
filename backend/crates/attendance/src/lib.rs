//! Attendance Capture Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, device and gateway ports
//! - `application/` - Capture state machine, location, permissions, cache
//! - `infra/` - HTTP gateway and host device adapters
//! - `presentation/` - Capture view model and navigator
//!
//! ## Capture Model
//! - Camera and location are acquired concurrently; either failing only
//!   disables capture until retried
//! - Location is best effort: first fix wins, bounded by a timeout and a
//!   fixed retry budget
//! - One capture per employee per calendar day; the day-scoped cache is
//!   consulted before any network I/O
//! - Nothing is persisted unless the gateway confirmed the submission

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AttendanceConfig;
pub use error::{AttendanceError, AttendanceResult};
pub use infra::{FileCamera, FixedGeolocation, HttpAttendanceGateway};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
