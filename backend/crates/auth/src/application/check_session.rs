//! Check Session Use Case
//!
//! Resolves the current session and the employee identity it carries.

use std::sync::Arc;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::employee_id::EmployeeId;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Current session or [`AuthError::NotAuthenticated`]
    pub async fn execute(&self) -> AuthResult<Session> {
        self.session_repo
            .load()
            .await?
            .ok_or(AuthError::NotAuthenticated)
    }

    /// Just the employee identity
    pub async fn employee_id(&self) -> AuthResult<EmployeeId> {
        Ok(self.execute().await?.employee_id)
    }

    /// Just check if a session exists (returns bool)
    pub async fn is_signed_in(&self) -> bool {
        matches!(self.session_repo.load().await, Ok(Some(_)))
    }
}
