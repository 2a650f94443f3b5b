//! Sign In Use Case
//!
//! Exchanges credentials for a session and persists it locally.

use std::sync::Arc;

use crate::domain::entity::session::{LoginOutcome, Session};
use crate::domain::repository::{AuthService, SessionRepository};
use crate::domain::value_object::credentials::Credentials;
use crate::error::{AuthError, AuthResult, LOGIN_FAILED_MESSAGE};

/// Sign in input
pub struct SignInInput {
    /// User name or email
    pub identifier: String,
    /// Password
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<A, S>
where
    A: AuthService,
    S: SessionRepository,
{
    auth_service: Arc<A>,
    session_repo: Arc<S>,
}

impl<A, S> SignInUseCase<A, S>
where
    A: AuthService,
    S: SessionRepository,
{
    pub fn new(auth_service: Arc<A>, session_repo: Arc<S>) -> Self {
        Self {
            auth_service,
            session_repo,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<Session> {
        let credentials = Credentials::new(input.identifier, input.password)?;

        let session = match self.auth_service.login(&credentials).await? {
            LoginOutcome::Success(session) => session,
            LoginOutcome::Failure { message } => {
                tracing::warn!(user = credentials.username(), "Login rejected");
                return Err(AuthError::LoginRejected(
                    message.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
                ));
            }
        };

        self.session_repo.save(&session).await?;

        tracing::info!(
            user = %session.username,
            employee = %session.employee_id,
            "User signed in"
        );

        Ok(session)
    }
}
