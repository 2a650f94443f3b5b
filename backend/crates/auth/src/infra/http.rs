//! HTTP Auth Service
//!
//! `reqwest` implementation of [`AuthService`] against the ERP login method.

use platform::client::{ApiClient, HttpError, read_json};
use platform::secret::SecretString;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::{LoginOutcome, Session};
use crate::domain::repository::AuthService;
use crate::domain::value_object::credentials::Credentials;
use crate::domain::value_object::employee_id::EmployeeId;
use crate::error::{AuthError, AuthResult};
use crate::infra::dto::{LoginMessage, LoginRequest, LoginResponse};

/// HTTP-backed Auth service
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
    login_method: String,
}

impl HttpAuthService {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        Ok(Self {
            client: ApiClient::new(&config.base_url, config.request_timeout)?,
            login_method: config.login_method.clone(),
        })
    }

    pub fn with_client(client: ApiClient, config: &AuthConfig) -> Self {
        Self {
            client,
            login_method: config.login_method.clone(),
        }
    }
}

impl AuthService for HttpAuthService {
    async fn login(&self, credentials: &Credentials) -> AuthResult<LoginOutcome> {
        let url = self.client.method_url(&self.login_method);
        let body = LoginRequest {
            usr: credentials.username(),
            pwd: credentials.password().expose(),
        };

        tracing::debug!(url = %url, user = credentials.username(), "Sending login request");

        let response = self
            .client
            .http()
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(HttpError::from)?;
        let response: LoginResponse = read_json(response).await?;

        into_outcome(response.message)
    }
}

/// Map the wire payload onto the domain outcome
fn into_outcome(message: LoginMessage) -> AuthResult<LoginOutcome> {
    if !message.is_success() {
        return Ok(LoginOutcome::Failure {
            message: message.message.filter(|m| !m.trim().is_empty()),
        });
    }

    let employee_id = message
        .employee_id
        .as_deref()
        .ok_or_else(|| AuthError::LoginRejected("No employee is linked to this user".to_string()))
        .and_then(|id| {
            EmployeeId::new(id)
                .map_err(|_| AuthError::LoginRejected("No employee is linked to this user".to_string()))
        })?;

    Ok(LoginOutcome::Success(Session {
        sid: message.sid.unwrap_or_default(),
        api_key: message.api_key.unwrap_or_default(),
        api_secret: SecretString::new(message.api_secret.unwrap_or_default()),
        username: message.username.unwrap_or_default(),
        email: message.email.unwrap_or_default(),
        employee_id,
        base_url: message.base_url.filter(|u| !u.is_empty()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_without_message() {
        let outcome = into_outcome(LoginMessage {
            success_key: 0,
            message: Some("  ".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(outcome, LoginOutcome::Failure { message: None }));
    }

    #[test]
    fn test_success_requires_employee() {
        let err = into_outcome(LoginMessage {
            success_key: 1,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, AuthError::LoginRejected(_)));
    }

    #[test]
    fn test_success_maps_fields() {
        let outcome = into_outcome(LoginMessage {
            success_key: 1,
            sid: Some("sid".into()),
            api_key: Some("k".into()),
            api_secret: Some("s".into()),
            employee_id: Some("E1".into()),
            base_url: Some(String::new()),
            ..Default::default()
        })
        .unwrap();

        let LoginOutcome::Success(session) = outcome else {
            panic!("expected success");
        };
        assert_eq!(session.employee_id.as_str(), "E1");
        assert_eq!(session.authorization_header(), "token k:s");
        assert!(session.base_url.is_none());
    }
}
