//! Session Entity
//!
//! The authenticated session handed out by the Auth service and kept in
//! durable local storage for use as bearer credentials.

use platform::client::token_header;
use platform::secret::SecretString;

use crate::domain::value_object::employee_id::EmployeeId;

/// Authenticated session
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Frappe session ID (cookie value)
    pub sid: String,
    /// API key half of the token pair
    pub api_key: String,
    /// API secret half of the token pair
    pub api_secret: SecretString,
    pub username: String,
    pub email: String,
    /// Employee the session records attendance for
    pub employee_id: EmployeeId,
    /// Server base URL reported at login (used to resolve relative file paths)
    pub base_url: Option<String>,
}

impl Session {
    /// `Authorization` header value derived from the token pair
    pub fn authorization_header(&self) -> String {
        token_header(&self.api_key, self.api_secret.expose())
    }

    /// Greeting name derived from the email local part
    ///
    /// `jane.doe@example.com` → `Jane`
    pub fn first_name(&self) -> String {
        let local = self.email.split('@').next().unwrap_or_default();
        let first = local
            .split(['.', '_', '-'])
            .find(|part| !part.is_empty())
            .unwrap_or(self.username.as_str());

        let mut chars = first.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

/// Outcome reported by the Auth service
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials accepted
    Success(Session),
    /// Credentials rejected, with the server's explanation when given
    Failure { message: Option<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(email: &str) -> Session {
        Session {
            sid: "sid".into(),
            api_key: "key".into(),
            api_secret: SecretString::new("secret"),
            username: "jdoe".into(),
            email: email.into(),
            employee_id: EmployeeId::new("E1").unwrap(),
            base_url: None,
        }
    }

    #[test]
    fn test_authorization_header() {
        assert_eq!(session("a@b.c").authorization_header(), "token key:secret");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(session("jane.doe@example.com").first_name(), "Jane");
        assert_eq!(session("JOHN@example.com").first_name(), "John");
        assert_eq!(session("").first_name(), "Jdoe");
    }
}
