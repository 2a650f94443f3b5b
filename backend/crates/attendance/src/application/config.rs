//! Application Configuration
//!
//! Configuration for the attendance application layer.

use std::time::Duration;

use platform::config::{env_duration_ms, env_or, env_parse};
use platform::retry::RetryPolicy;

/// Attendance application configuration
#[derive(Debug, Clone)]
pub struct AttendanceConfig {
    /// ERP server base URL
    pub base_url: String,
    /// Per-attempt bound on the location watch
    pub location_timeout: Duration,
    /// Retries after a failed location attempt
    pub location_retry: RetryPolicy,
    /// Maximum number of log rows fetched
    pub log_limit: u32,
    /// Per-request timeout
    pub request_timeout: Duration,
    pub checkin_method: String,
    pub checkout_method: String,
    pub logs_method: String,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            location_timeout: Duration::from_secs(8),
            location_retry: RetryPolicy::default(),
            log_limit: 15,
            request_timeout: Duration::from_secs(30),
            checkin_method: "erp_attendance.api.log_employee_checkin".to_string(),
            checkout_method: "erp_attendance.api.log_employee_checkout".to_string(),
            logs_method: "erp_attendance.api.get_employee_checkin_logs".to_string(),
        }
    }
}

impl AttendanceConfig {
    /// Load overrides from the environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let retry = RetryPolicy {
            max_retries: env_parse(
                "ATTENDANCE_LOCATION_RETRIES",
                defaults.location_retry.max_retries,
            ),
            delay: env_duration_ms(
                "ATTENDANCE_LOCATION_RETRY_DELAY_MS",
                defaults.location_retry.delay,
            ),
        };

        Self {
            base_url: env_or("ATTENDANCE_API_BASE_URL", &defaults.base_url),
            location_timeout: env_duration_ms(
                "ATTENDANCE_LOCATION_TIMEOUT_MS",
                defaults.location_timeout,
            ),
            location_retry: retry,
            log_limit: env_parse("ATTENDANCE_LOG_LIMIT", defaults.log_limit),
            request_timeout: env_duration_ms(
                "ATTENDANCE_HTTP_TIMEOUT_MS",
                defaults.request_timeout,
            ),
            ..defaults
        }
    }
}
