//! Domain Layer - Capture vocabulary and ports
//!
//! This layer contains:
//! - Domain entities (CaptureResult, CacheEntry, AttendanceLog)
//! - Domain value objects (Coordinates, permission states, routes)
//! - Domain services (calendar-day comparison, log ordering, clock)
//! - Port traits (device, gateway and log query interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
