//! Sign Out Use Case
//!
//! Logout is purely local: every persisted key is dropped, including the
//! day-scoped capture cache and running history.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self) -> AuthResult<()> {
        self.session_repo.clear_all().await?;
        tracing::info!("User signed out, local state cleared");
        Ok(())
    }
}
