//! Wire DTOs for the attendance methods

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AttendanceLog, SubmissionReceipt};

/// Frappe wraps a method's return value in `{"message": ...}`; some
/// deployments answer with the bare payload. Both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { message: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { message } | Envelope::Bare(message) => message,
        }
    }
}

/// Check-in / checkout response
pub type ReceiptResponse = Envelope<SubmissionReceipt>;

/// Body of the checkout method
#[derive(Debug, Serialize)]
pub struct CheckoutRequest<'a> {
    pub employee_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<f64>,
}

/// Query string of the log method
#[derive(Debug, Serialize)]
pub struct LogsQuery<'a> {
    pub employee: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_attendance_status: Option<&'a str>,
    pub limit: u32,
}

/// Log method payload
#[derive(Debug, Default, Deserialize)]
pub struct LogsPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub logs: Vec<AttendanceLog>,
}

pub type LogsResponse = Envelope<LogsPayload>;
