//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, value objects, port traits
//! - `application/` - Sign in / sign out / check session use cases
//! - `infra/` - HTTP Auth service and key-value session storage
//!
//! ## Features
//! - Login against the ERP `user_login` method (token pair + employee ID)
//! - Durable session persistence in the local key-value store
//! - Logout clears every locally persisted key
//!
//! ## Security Model
//! - Passwords and API secrets are zeroized on drop and redacted in logs
//! - Requests authenticate with `Authorization: token <key>:<secret>`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::{EmployeeId, Session, SessionRepository};
pub use error::{AuthError, AuthResult};
pub use infra::{HttpAuthService, KvSessionRepository};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
