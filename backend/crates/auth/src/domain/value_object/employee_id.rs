//! Employee ID Value Object
//!
//! Identifier of the employee record the session acts for
//! (e.g. `HR-EMP-00001`). Opaque to the client beyond being non-blank.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum employee ID length
const EMPLOYEE_ID_MAX_LENGTH: usize = 140;

/// Employee identifier value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Create a new employee ID with validation
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(AppError::unauthenticated("Employee ID cannot be empty"));
        }

        if value.len() > EMPLOYEE_ID_MAX_LENGTH {
            return Err(AppError::parse(format!(
                "Employee ID must be at most {} characters",
                EMPLOYEE_ID_MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_valid_employee_id() {
        let id = EmployeeId::new("  HR-EMP-00001 ").unwrap();
        assert_eq!(id.as_str(), "HR-EMP-00001");
        assert_eq!(id.to_string(), "HR-EMP-00001");
    }

    #[test]
    fn test_blank_employee_id() {
        let err = EmployeeId::new("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_serde_validates() {
        let id: EmployeeId = serde_json::from_str("\"E1\"").unwrap();
        assert_eq!(id.as_str(), "E1");
        assert!(serde_json::from_str::<EmployeeId>("\"\"").is_err());
    }
}
