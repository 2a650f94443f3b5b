//! Login Credentials Value Object

use kernel::error::app_error::{AppError, AppResult};
use platform::secret::SecretString;

/// User name (or email) and password pair sent to the Auth service
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting blank fields before any network call
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> AppResult<Self> {
        let username = username.into().trim().to_string();
        let password = SecretString::new(password);

        if username.is_empty() {
            return Err(AppError::rejected("Username cannot be empty")
                .with_action("Enter your user name or email"));
        }
        if password.is_empty() {
            return Err(AppError::rejected("Password cannot be empty")
                .with_action("Enter your password"));
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_trim_username() {
        let creds = Credentials::new(" jane@example.com ", "pw").unwrap();
        assert_eq!(creds.username(), "jane@example.com");
        assert_eq!(creds.password().expose(), "pw");
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(Credentials::new("", "pw").is_err());
        assert!(Credentials::new("jane", "  ").is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("jane", "hunter22").unwrap();
        assert!(!format!("{:?}", creds).contains("hunter22"));
    }
}
