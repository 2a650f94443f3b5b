//! ERP HTTP client utilities
//!
//! Shared `reqwest` plumbing for the Frappe-style `/api/method/<name>`
//! endpoints used by the auth and attendance crates.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Prefix of every whitelisted server method
const METHOD_PREFIX: &str = "/api/method/";

/// Error when talking to the ERP server
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection, TLS, timeout or body transfer failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body does not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Transport(e) => e.status().map(|s| s.as_u16()),
            HttpError::Decode(_) => None,
        }
    }

    /// Human-readable message sent by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            HttpError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(e) if e.is_timeout())
    }
}

/// Thin wrapper over `reqwest::Client` bound to an ERP base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HttpError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wrap an existing `reqwest::Client`
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of a whitelisted server method
    ///
    /// `method_url("erp_attendance.api.user_login")` →
    /// `https://erp.example.com/api/method/erp_attendance.api.user_login`
    pub fn method_url(&self, method: &str) -> String {
        format!("{}{}{}", self.base_url, METHOD_PREFIX, method)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Build the `Authorization` header value for API key authentication
pub fn token_header(api_key: &str, api_secret: &str) -> String {
    format!("token {}:{}", api_key, api_secret)
}

/// Read a JSON body, turning non-2xx responses into [`HttpError::Status`]
pub async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, HttpError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = extract_server_message(&body);
        tracing::debug!(status = status.as_u16(), message = ?message, "ERP request rejected");
        return Err(HttpError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Extract a user-facing message from a Frappe response body
///
/// Recognised shapes, in order:
/// - `{"message": "..."}`
/// - `{"message": {"message": "..."}}`
/// - `{"_server_messages": "[\"{\\\"message\\\": \\\"...\\\"}\"]"}`
/// - `{"exception": "frappe.exceptions.ValidationError: ..."}`
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("message") {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
        Some(inner) => {
            if let Some(s) = inner.get("message").and_then(|m| m.as_str()) {
                if !s.trim().is_empty() {
                    return Some(s.to_string());
                }
            }
        }
        None => {}
    }

    if let Some(raw) = value.get("_server_messages").and_then(|m| m.as_str()) {
        let first = serde_json::from_str::<Vec<String>>(raw)
            .ok()
            .and_then(|messages| messages.into_iter().next());
        if let Some(encoded) = first {
            let message = serde_json::from_str::<serde_json::Value>(&encoded)
                .ok()
                .and_then(|m| m.get("message").and_then(|s| s.as_str()).map(str::to_string))
                .unwrap_or(encoded);
            return Some(message);
        }
    }

    value
        .get("exception")
        .and_then(|e| e.as_str())
        .map(|e| match e.split_once(": ") {
            Some((_, message)) => message.to_string(),
            None => e.to_string(),
        })
}
