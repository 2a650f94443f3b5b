//! Key-Value Session Repository
//!
//! Stores each session field under its own key, mirroring the layout the
//! web client used in `localStorage`.

use std::sync::Arc;

use platform::secret::SecretString;
use platform::storage::KeyValueStore;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::employee_id::EmployeeId;
use crate::error::{AuthError, AuthResult};

pub const KEY_SID: &str = "sid";
pub const KEY_API_KEY: &str = "api_key";
pub const KEY_API_SECRET: &str = "api_secret";
pub const KEY_USERNAME: &str = "username";
pub const KEY_EMAIL: &str = "email";
pub const KEY_EMPLOYEE_ID: &str = "employee_id";
pub const KEY_BASE_URL: &str = "base_url";

/// Session repository over any [`KeyValueStore`]
pub struct KvSessionRepository<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> KvSessionRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> AuthResult<String> {
        Ok(self.store.get(key)?.unwrap_or_default())
    }
}

impl<S: KeyValueStore> Clone for KvSessionRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> SessionRepository for KvSessionRepository<S> {
    async fn save(&self, session: &Session) -> AuthResult<()> {
        self.store.set(KEY_SID, &session.sid)?;
        self.store.set(KEY_API_KEY, &session.api_key)?;
        self.store.set(KEY_API_SECRET, session.api_secret.expose())?;
        self.store.set(KEY_USERNAME, &session.username)?;
        self.store.set(KEY_EMAIL, &session.email)?;
        self.store.set(KEY_EMPLOYEE_ID, session.employee_id.as_str())?;
        match &session.base_url {
            Some(url) => self.store.set(KEY_BASE_URL, url)?,
            None => self.store.remove(KEY_BASE_URL)?,
        }
        Ok(())
    }

    async fn load(&self) -> AuthResult<Option<Session>> {
        let Some(raw_employee) = self.store.get(KEY_EMPLOYEE_ID)? else {
            return Ok(None);
        };
        if raw_employee.trim().is_empty() {
            return Ok(None);
        }
        let employee_id = EmployeeId::new(raw_employee)
            .map_err(|e| AuthError::CorruptSession(e.message().to_string()))?;

        Ok(Some(Session {
            sid: self.read(KEY_SID)?,
            api_key: self.read(KEY_API_KEY)?,
            api_secret: SecretString::new(self.read(KEY_API_SECRET)?),
            username: self.read(KEY_USERNAME)?,
            email: self.read(KEY_EMAIL)?,
            employee_id,
            base_url: self.store.get(KEY_BASE_URL)?.filter(|u| !u.is_empty()),
        }))
    }

    async fn clear_all(&self) -> AuthResult<()> {
        self.store.clear()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::storage::MemoryStore;

    fn session() -> Session {
        Session {
            sid: "sid".into(),
            api_key: "k".into(),
            api_secret: SecretString::new("s"),
            username: "jane".into(),
            email: "jane@example.com".into(),
            employee_id: EmployeeId::new("E1").unwrap(),
            base_url: Some("https://erp.example.com".into()),
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = Arc::new(MemoryStore::new());
        let repo = KvSessionRepository::new(store.clone());

        repo.save(&session()).await.unwrap();
        assert_eq!(store.get(KEY_EMPLOYEE_ID).unwrap().as_deref(), Some("E1"));

        let loaded = repo.load().await.unwrap().unwrap();
        assert_eq!(loaded, session());
    }

    #[tokio::test]
    async fn test_missing_employee_means_signed_out() {
        let store = Arc::new(MemoryStore::new());
        store.set(KEY_API_KEY, "k").unwrap();
        let repo = KvSessionRepository::new(store);

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_all_drops_unrelated_keys() {
        let store = Arc::new(MemoryStore::new());
        store.set("todayAttendance", "{}").unwrap();
        let repo = KvSessionRepository::new(store.clone());
        repo.save(&session()).await.unwrap();

        repo.clear_all().await.unwrap();
        assert!(store.is_empty());
    }
}
