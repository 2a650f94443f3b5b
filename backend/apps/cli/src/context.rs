//! Wiring shared by every command

use std::sync::Arc;

use attendance::application::{AttendanceStore, DayScopedResultCache};
use attendance::domain::services::{Clock, SystemClock};
use attendance::{AttendanceResult, HttpAttendanceGateway};
use auth::KvSessionRepository;
use platform::storage::{FileStore, StorageError};

use crate::config::CliConfig;

pub type Sessions = KvSessionRepository<FileStore>;
pub type Gateway = HttpAttendanceGateway<Sessions>;

pub struct AppContext {
    pub config: CliConfig,
    pub kv: Arc<FileStore>,
    pub sessions: Arc<Sessions>,
    pub clock: Arc<dyn Clock>,
}

impl AppContext {
    pub fn open(config: CliConfig) -> Result<Self, StorageError> {
        let kv = Arc::new(FileStore::open(config.state_file.clone())?);
        tracing::debug!(path = %config.state_file.display(), "Opened local state");

        Ok(Self {
            sessions: Arc::new(KvSessionRepository::new(kv.clone())),
            clock: Arc::new(SystemClock),
            config,
            kv,
        })
    }

    pub fn gateway(&self) -> AttendanceResult<Arc<Gateway>> {
        Ok(Arc::new(HttpAttendanceGateway::new(
            &self.config.attendance,
            self.sessions.clone(),
        )?))
    }

    pub fn store(&self) -> Arc<AttendanceStore<FileStore>> {
        Arc::new(AttendanceStore::new(
            self.kv.clone(),
            self.config.attendance.log_limit,
        ))
    }

    pub fn cache(&self) -> DayScopedResultCache<FileStore> {
        DayScopedResultCache::new(self.kv.clone(), self.clock.clone())
    }
}
