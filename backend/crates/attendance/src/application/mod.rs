//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod capture;
pub mod checkout;
pub mod config;
pub mod day_cache;
pub mod location;
pub mod permissions;
pub mod store;

// Re-exports
pub use capture::{CaptureOrchestrator, CaptureOutcome, CaptureState, CaptureStep};
pub use checkout::{CheckoutOutput, CheckoutUseCase};
pub use config::AttendanceConfig;
pub use day_cache::DayScopedResultCache;
pub use location::LocationResolver;
pub use permissions::{PermissionAcquirer, PermissionState};
pub use store::{AttendanceStore, LogState};
