//! Domain Entities
//!
//! Core entities for the capture domain.

use auth::EmployeeId;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use kernel::id::CaptureId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CaptureStatus, Coordinates, LogType};

/// Record returned by the gateway under `checkin_details`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckinRecord {
    pub name: String,
    pub employee: String,
    pub time: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Gateway answer to a submission or a checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "checkin_details", default)]
    pub record: Option<CheckinRecord>,
}

/// Frame and fix handed to the gateway
#[derive(Debug, Clone)]
pub struct Submission {
    pub employee_id: EmployeeId,
    pub coordinates: Coordinates,
    /// Encoded still frame
    pub image: Vec<u8>,
    pub mime: String,
}

/// CaptureResult entity - one successful capture
///
/// Built exactly once, after the gateway confirmed the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureResult {
    pub id: CaptureId,
    /// Serialized as an RFC 3339 string
    pub timestamp: DateTime<Local>,
    pub coordinates: Coordinates,
    /// `data:` URL of the frame; `null` once persisted
    pub photo: Option<String>,
    pub remote_response: SubmissionReceipt,
}

impl CaptureResult {
    pub fn new(
        timestamp: DateTime<Local>,
        coordinates: Coordinates,
        photo: Option<String>,
        remote_response: SubmissionReceipt,
    ) -> Self {
        Self {
            id: CaptureId::new(),
            timestamp,
            coordinates,
            photo,
            remote_response,
        }
    }

    /// Calendar date of the capture in local time
    pub fn captured_on(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Copy suitable for persistence (frame dropped)
    pub fn without_photo(&self) -> Self {
        Self {
            photo: None,
            ..self.clone()
        }
    }
}

/// Day-scoped cache entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub status: CaptureStatus,
    pub employee_id: EmployeeId,
    pub result: CaptureResult,
}

impl CacheEntry {
    pub fn success(employee_id: EmployeeId, result: &CaptureResult) -> Self {
        Self {
            status: CaptureStatus::Success,
            employee_id,
            result: result.without_photo(),
        }
    }

    /// Hit test: success status, same employee, same calendar day
    pub fn satisfies(&self, employee_id: &EmployeeId, today: NaiveDate) -> bool {
        self.status == CaptureStatus::Success
            && &self.employee_id == employee_id
            && self.result.captured_on() == today
    }
}

/// One row of the attendance log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLog {
    pub name: String,
    pub employee: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub log_type: LogType,
    /// Server local time, `YYYY-MM-DD HH:MM:SS[.ffffff]`
    pub time: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub custom_attendance_status: Option<String>,
    #[serde(default)]
    pub checkin_image: Option<String>,
}

impl AttendanceLog {
    /// Parsed event time, if the server sent a recognizable format
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        let raw = self.time.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|t| t.naive_local()))
    }

    /// Absolute image URL; server-relative paths are prefixed with `base_url`
    pub fn image_url(&self, base_url: &str) -> Option<String> {
        let path = self.checkin_image.as_deref()?.trim();
        if path.is_empty() {
            return None;
        }
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:")
        {
            return Some(path.to_string());
        }
        let base = base_url.trim_end_matches('/');
        if path.starts_with('/') {
            Some(format!("{}{}", base, path))
        } else {
            Some(format!("{}/{}", base, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn log(time: &str, image: Option<&str>) -> AttendanceLog {
        AttendanceLog {
            name: "EMP-CKIN-0001".into(),
            employee: "E1".into(),
            employee_name: Some("Jane Doe".into()),
            log_type: LogType::In,
            time: time.into(),
            latitude: Some(12.9),
            longitude: Some(77.6),
            custom_attendance_status: None,
            checkin_image: image.map(str::to_string),
        }
    }

    fn result_at(y: i32, m: u32, d: u32) -> CaptureResult {
        CaptureResult::new(
            Local.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap(),
            Coordinates::new(12.9, 77.6, Some(15.0)),
            Some("data:image/png;base64,AAAA".into()),
            SubmissionReceipt {
                message: "ok".into(),
                record: None,
            },
        )
    }

    #[test]
    fn test_parsed_time_formats() {
        let with_fraction = log("2025-06-01 09:15:00.123456", None);
        let plain = log("2025-06-01 09:15:00", None);
        let garbage = log("yesterday", None);

        assert!(with_fraction.parsed_time().is_some());
        assert_eq!(
            plain.parsed_time().unwrap().to_string(),
            "2025-06-01 09:15:00"
        );
        assert!(garbage.parsed_time().is_none());
    }

    #[test]
    fn test_image_url_resolution() {
        let base = "https://erp.example.com/";
        assert_eq!(
            log("t", Some("/files/a.png")).image_url(base).as_deref(),
            Some("https://erp.example.com/files/a.png")
        );
        assert_eq!(
            log("t", Some("files/a.png")).image_url(base).as_deref(),
            Some("https://erp.example.com/files/a.png")
        );
        assert_eq!(
            log("t", Some("https://cdn.example.com/a.png"))
                .image_url(base)
                .as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(log("t", Some("  ")).image_url(base), None);
        assert_eq!(log("t", None).image_url(base), None);
    }

    #[test]
    fn test_cache_entry_drops_photo() {
        let result = result_at(2025, 6, 1);
        let entry = CacheEntry::success(EmployeeId::new("E1").unwrap(), &result);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "success");
        assert!(json["result"]["photo"].is_null());
        assert!(json["result"]["timestamp"].is_string());
    }

    #[test]
    fn test_cache_entry_satisfies() {
        let result = result_at(2025, 6, 1);
        let e1 = EmployeeId::new("E1").unwrap();
        let e2 = EmployeeId::new("E2").unwrap();
        let entry = CacheEntry::success(e1.clone(), &result);

        let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let next_day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert!(entry.satisfies(&e1, day));
        assert!(!entry.satisfies(&e1, next_day));
        assert!(!entry.satisfies(&e2, day));
    }

    #[test]
    fn test_timestamp_survives_serialization() {
        let result = result_at(2025, 6, 1).without_photo();
        let json = serde_json::to_string(&result).unwrap();
        let back: CaptureResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timestamp, result.timestamp);
        assert_eq!(back.captured_on(), result.captured_on());
    }
}
