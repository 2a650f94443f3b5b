//! Day-Scoped Result Cache
//!
//! Single durable slot holding the last successful capture. A read is a hit
//! only for the same employee on the same local calendar day; staleness is
//! judged lazily, there is no eviction.

use std::sync::Arc;

use auth::EmployeeId;
use platform::storage::KeyValueStore;

use crate::domain::entities::{CacheEntry, CaptureResult};
use crate::domain::services::Clock;
use crate::error::{AttendanceError, AttendanceResult};

/// Storage key of the cache slot
pub const CACHE_KEY: &str = "todayAttendance";

/// Day-scoped result cache
pub struct DayScopedResultCache<K>
where
    K: KeyValueStore,
{
    store: Arc<K>,
    clock: Arc<dyn Clock>,
}

impl<K> Clone for DayScopedResultCache<K>
where
    K: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<K> DayScopedResultCache<K>
where
    K: KeyValueStore,
{
    pub fn new(store: Arc<K>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Today's result for `employee_id`, if any
    ///
    /// Unreadable entries are logged and read as a miss.
    pub fn get(&self, employee_id: &EmployeeId) -> Option<CaptureResult> {
        let raw = match self.store.get(CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                AttendanceError::from(e).log();
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                AttendanceError::CorruptState(e).log();
                return None;
            }
        };

        if entry.satisfies(employee_id, self.clock.today()) {
            Some(entry.result)
        } else {
            tracing::debug!(
                employee = %employee_id,
                cached_employee = %entry.employee_id,
                cached_on = %entry.result.captured_on(),
                "Cached capture is stale"
            );
            None
        }
    }

    /// Replace the slot with `result`
    pub fn put(&self, employee_id: &EmployeeId, result: &CaptureResult) -> AttendanceResult<()> {
        let entry = CacheEntry::success(employee_id.clone(), result);
        self.store.set(CACHE_KEY, &serde_json::to_string(&entry)?)?;
        Ok(())
    }

    pub fn clear(&self) -> AttendanceResult<()> {
        self.store.remove(CACHE_KEY)?;
        Ok(())
    }
}
