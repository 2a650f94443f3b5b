//! Wire DTOs for the Auth service

use serde::{Deserialize, Serialize};

/// Body of `POST /api/method/erp_attendance.api.user_login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub usr: &'a str,
    pub pwd: &'a str,
}

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: LoginMessage,
    #[serde(default)]
    pub home_page: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Discriminated login payload: `success_key == 1` means success
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginMessage {
    pub success_key: i64,
    pub message: Option<String>,
    pub sid: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub user_image: Option<String>,
    pub employee_id: Option<String>,
    pub base_url: Option<String>,
}

impl LoginMessage {
    pub fn is_success(&self) -> bool {
        self.success_key == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_payload() {
        let json = r#"{
            "message": {
                "success_key": 1,
                "message": "Authentication success",
                "sid": "abc",
                "api_key": "k",
                "api_secret": "s",
                "username": "jane",
                "email": "jane@example.com",
                "mobile_no": "",
                "user_image": null,
                "employee_id": "HR-EMP-00001",
                "base_url": "https://erp.example.com"
            },
            "home_page": "/app",
            "full_name": "Jane Doe"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.message.is_success());
        assert_eq!(response.message.employee_id.as_deref(), Some("HR-EMP-00001"));
        assert_eq!(response.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_failure_payload_is_sparse() {
        let json = r#"{"message": {"success_key": 0, "message": "Invalid login credentials"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(!response.message.is_success());
        assert!(response.message.sid.is_none());
    }

    #[test]
    fn test_request_field_names() {
        let json = serde_json::to_string(&LoginRequest { usr: "u", pwd: "p" }).unwrap();
        assert_eq!(json, r#"{"usr":"u","pwd":"p"}"#);
    }
}
