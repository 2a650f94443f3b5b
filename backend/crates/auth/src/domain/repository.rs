//! Repository Traits
//!
//! Interfaces for the Auth service and session persistence.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::session::{LoginOutcome, Session};
use crate::domain::value_object::credentials::Credentials;
use crate::error::AuthResult;

/// Remote Auth service
#[trait_variant::make(AuthService: Send)]
pub trait LocalAuthService {
    /// Exchange credentials for a session
    async fn login(&self, credentials: &Credentials) -> AuthResult<LoginOutcome>;
}

/// Durable session storage
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist the session (replaces any previous one)
    async fn save(&self, session: &Session) -> AuthResult<()>;

    /// Load the current session, if any
    async fn load(&self) -> AuthResult<Option<Session>>;

    /// Remove every piece of locally persisted state
    async fn clear_all(&self) -> AuthResult<()>;
}
