//! Domain Services
//!
//! Calendar and ordering rules shared by the use cases.

use std::cmp::Ordering;

use chrono::{DateTime, Local, NaiveDate};

use crate::domain::entities::AttendanceLog;

/// Source of "now" in local time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Order logs newest first; rows with an unreadable time sink to the end
pub fn sort_newest_first(logs: &mut [AttendanceLog]) {
    logs.sort_by(|a, b| match (a.parsed_time(), b.parsed_time()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LogType;

    fn log(name: &str, time: &str) -> AttendanceLog {
        AttendanceLog {
            name: name.into(),
            employee: "E1".into(),
            employee_name: None,
            log_type: LogType::In,
            time: time.into(),
            latitude: None,
            longitude: None,
            custom_attendance_status: None,
            checkin_image: None,
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut logs = vec![
            log("a", "2025-06-01 09:00:00"),
            log("broken", "n/a"),
            log("c", "2025-06-03 09:00:00.5"),
            log("b", "2025-06-02 18:30:00"),
        ];

        sort_newest_first(&mut logs);

        let names: Vec<_> = logs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a", "broken"]);
    }
}
