//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::session::{LoginOutcome, Session};
pub use repository::{AuthService, SessionRepository};
pub use value_object::{credentials::Credentials, employee_id::EmployeeId};
