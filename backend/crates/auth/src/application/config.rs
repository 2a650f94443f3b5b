//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::config::{env_duration_ms, env_or};

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// ERP server base URL
    pub base_url: String,
    /// Whitelisted login method
    pub login_method: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            login_method: "erp_attendance.api.user_login".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AuthConfig {
    /// Load from `ATTENDANCE_API_BASE_URL` / `ATTENDANCE_HTTP_TIMEOUT_MS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_or("ATTENDANCE_API_BASE_URL", &defaults.base_url),
            request_timeout: env_duration_ms("ATTENDANCE_HTTP_TIMEOUT_MS", defaults.request_timeout),
            ..defaults
        }
    }
}
