//! Attendance Store
//!
//! Client state injected into the use cases: the running history of
//! captures made on this device, the log list, and the status filter.

use std::sync::{Arc, Mutex, MutexGuard};

use auth::EmployeeId;
use platform::storage::KeyValueStore;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{AttendanceLog, CaptureResult};
use crate::domain::repository::{LogQuery, LogQueryService};
use crate::domain::services::sort_newest_first;
use crate::error::{AttendanceError, AttendanceResult, LOGS_FAILED_MESSAGE};

/// Storage key of the running history
pub const HISTORY_KEY: &str = "employee-storage";

/// Storage key of the status filter preference
pub const STATUS_FILTER_KEY: &str = "logStatusFilter";

/// Persisted shape: `{"state": {"attendances": [...]}, "version": 0}`
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedHistory {
    #[serde(default)]
    state: HistoryState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryState {
    #[serde(default)]
    attendances: Vec<CaptureResult>,
}

/// Log list as shown to the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogState {
    pub entries: Vec<AttendanceLog>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Attendance store
pub struct AttendanceStore<K>
where
    K: KeyValueStore,
{
    store: Arc<K>,
    log_limit: u32,
    logs: Mutex<LogState>,
}

impl<K> AttendanceStore<K>
where
    K: KeyValueStore,
{
    pub fn new(store: Arc<K>, log_limit: u32) -> Self {
        Self {
            store,
            log_limit,
            logs: Mutex::new(LogState::default()),
        }
    }

    fn logs(&self) -> MutexGuard<'_, LogState> {
        self.logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load_history(&self) -> AttendanceResult<PersistedHistory> {
        match self.store.get(HISTORY_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(PersistedHistory::default()),
        }
    }

    /// Every capture made on this device, oldest first
    ///
    /// An unreadable history reads as empty.
    pub fn attendances(&self) -> Vec<CaptureResult> {
        match self.load_history() {
            Ok(history) => history.state.attendances,
            Err(e) => {
                e.log();
                Vec::new()
            }
        }
    }

    pub fn last_attendance(&self) -> Option<CaptureResult> {
        self.attendances().pop()
    }

    /// Append a capture to the running history
    pub fn add_attendance(&self, result: &CaptureResult) -> AttendanceResult<()> {
        let mut history = self.load_history().unwrap_or_else(|e| {
            e.log();
            PersistedHistory::default()
        });
        history.state.attendances.push(result.without_photo());
        self.store
            .set(HISTORY_KEY, &serde_json::to_string(&history)?)?;
        Ok(())
    }

    /// Persisted status filter; `None` means every status
    pub fn status_filter(&self) -> Option<String> {
        match self.store.get(STATUS_FILTER_KEY) {
            Ok(filter) => filter.filter(|f| !f.trim().is_empty()),
            Err(e) => {
                AttendanceError::from(e).log();
                None
            }
        }
    }

    pub fn set_status_filter(&self, status: Option<&str>) -> AttendanceResult<()> {
        match status.map(str::trim).filter(|s| !s.is_empty()) {
            Some(status) => self.store.set(STATUS_FILTER_KEY, status)?,
            None => self.store.remove(STATUS_FILTER_KEY)?,
        }
        Ok(())
    }

    /// Snapshot of the log list
    pub fn log_state(&self) -> LogState {
        self.logs().clone()
    }

    /// Reload the log list for `employee`
    ///
    /// On failure the previous entries are kept and the error text is
    /// recorded in the log state.
    pub async fn fetch_logs<L>(
        &self,
        service: &L,
        employee: &EmployeeId,
    ) -> AttendanceResult<Vec<AttendanceLog>>
    where
        L: LogQueryService,
    {
        {
            let mut logs = self.logs();
            logs.loading = true;
            logs.error = None;
        }

        let query = LogQuery {
            employee: employee.clone(),
            status: self.status_filter(),
            limit: self.log_limit,
        };

        match service.fetch_logs(&query).await {
            Ok(mut entries) => {
                sort_newest_first(&mut entries);
                tracing::debug!(employee = %employee, count = entries.len(), "Logs refreshed");
                let mut logs = self.logs();
                logs.entries = entries.clone();
                logs.loading = false;
                Ok(entries)
            }
            Err(e) => {
                e.log();
                let mut logs = self.logs();
                logs.loading = false;
                logs.error = Some(LOGS_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }
}
