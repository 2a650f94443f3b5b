//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::HttpError;
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message shown when the server gives no reason for a failed login
pub const LOGIN_FAILED_MESSAGE: &str =
    "Login failed. Please check your credentials or try again later.";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials rejected by the Auth service
    #[error("{0}")]
    LoginRejected(String),

    /// No session (or no employee) stored locally
    #[error("Employee ID not found. Please log in again.")]
    NotAuthenticated,

    /// Input rejected before reaching the network
    #[error("{0}")]
    InvalidInput(String),

    /// HTTP transport or status error
    #[error("Auth service error: {0}")]
    Http(#[from] HttpError),

    /// Local storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored session is unreadable
    #[error("Stored session is corrupt: {0}")]
    CorruptSession(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::LoginRejected(_) | AuthError::NotAuthenticated => {
                ErrorKind::Unauthenticated
            }
            AuthError::InvalidInput(_) => ErrorKind::Rejected,
            AuthError::Http(e) => match e.status() {
                Some(status) => ErrorKind::from_status(status),
                None if e.is_timeout() => ErrorKind::Timeout,
                None => match e {
                    HttpError::Decode(_) => ErrorKind::Parse,
                    _ => ErrorKind::Network,
                },
            },
            AuthError::Storage(_) => ErrorKind::Storage,
            AuthError::CorruptSession(_) => ErrorKind::Parse,
        }
    }

    /// Message suitable for the login form
    ///
    /// Server messages are surfaced verbatim; transport failures collapse to
    /// the generic login failure text.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Http(e) => e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            other => other.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.user_message());
        match self {
            AuthError::NotAuthenticated | AuthError::LoginRejected(_) => {
                err.with_action("Run `attendance login` to sign in")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Auth storage error");
            }
            AuthError::CorruptSession(msg) => {
                tracing::error!(message = %msg, "Stored session is corrupt");
            }
            AuthError::LoginRejected(_) => {
                tracing::warn!("Login rejected by server");
            }
            AuthError::Http(e) => {
                tracing::warn!(error = %e, "Auth service request failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        let app = err.to_app_error();
        app.with_source(err)
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Unauthenticated => AuthError::NotAuthenticated,
            ErrorKind::Parse => AuthError::CorruptSession(err.message().to_string()),
            _ => AuthError::InvalidInput(err.message().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            AuthError::NotAuthenticated.kind(),
            ErrorKind::Unauthenticated
        );
        assert_eq!(
            AuthError::LoginRejected("nope".into()).kind(),
            ErrorKind::Unauthenticated
        );
        assert_eq!(
            AuthError::Http(HttpError::Status {
                status: 503,
                message: None
            })
            .kind(),
            ErrorKind::Server
        );
        assert_eq!(
            AuthError::CorruptSession("x".into()).kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = AuthError::Http(HttpError::Status {
            status: 401,
            message: Some("Invalid login credentials".into()),
        });
        assert_eq!(err.user_message(), "Invalid login credentials");

        let err = AuthError::Http(HttpError::Status {
            status: 500,
            message: None,
        });
        assert_eq!(err.user_message(), LOGIN_FAILED_MESSAGE);
    }

    #[test]
    fn test_app_error_carries_action() {
        let app: AppError = AuthError::NotAuthenticated.into();
        assert_eq!(app.kind(), ErrorKind::Unauthenticated);
        assert!(app.action().is_some());
    }
}
