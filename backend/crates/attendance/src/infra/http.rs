//! HTTP Attendance Gateway
//!
//! `reqwest` implementation of [`AttendanceGateway`] and
//! [`LogQueryService`] against the ERP attendance methods. Every request is
//! authenticated with the token pair of the stored session.

use std::sync::Arc;

use auth::{EmployeeId, Session, SessionRepository};
use platform::client::{ApiClient, HttpError, read_json};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};

use crate::application::config::AttendanceConfig;
use crate::domain::entities::{AttendanceLog, Submission, SubmissionReceipt};
use crate::domain::repository::{AttendanceGateway, LogQuery, LogQueryService};
use crate::domain::value_objects::Coordinates;
use crate::error::{
    AttendanceError, AttendanceResult, CHECKOUT_FAILED_MESSAGE, LOGS_FAILED_MESSAGE,
    SUBMIT_FAILED_MESSAGE,
};
use crate::infra::dto::{CheckoutRequest, LogsQuery, LogsResponse, ReceiptResponse};

/// File name of the uploaded frame
const CHECKIN_IMAGE_NAME: &str = "checkin_image.png";

/// HTTP-backed gateway
pub struct HttpAttendanceGateway<S>
where
    S: SessionRepository,
{
    client: ApiClient,
    session_repo: Arc<S>,
    checkin_method: String,
    checkout_method: String,
    logs_method: String,
}

impl<S> HttpAttendanceGateway<S>
where
    S: SessionRepository,
{
    pub fn new(config: &AttendanceConfig, session_repo: Arc<S>) -> AttendanceResult<Self> {
        let client = ApiClient::new(&config.base_url, config.request_timeout)
            .map_err(|e| AttendanceError::gateway(e, SUBMIT_FAILED_MESSAGE))?;
        Ok(Self::with_client(client, config, session_repo))
    }

    pub fn with_client(client: ApiClient, config: &AttendanceConfig, session_repo: Arc<S>) -> Self {
        Self {
            client,
            session_repo,
            checkin_method: config.checkin_method.clone(),
            checkout_method: config.checkout_method.clone(),
            logs_method: config.logs_method.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn session(&self) -> AttendanceResult<Session> {
        self.session_repo
            .load()
            .await?
            .ok_or(AttendanceError::NotAuthenticated)
    }
}

fn form_for(submission: &Submission) -> Result<Form, HttpError> {
    let image = Part::bytes(submission.image.clone())
        .file_name(CHECKIN_IMAGE_NAME)
        .mime_str(&submission.mime)?;

    Ok(Form::new()
        .text("lat", submission.coordinates.latitude.to_string())
        .text("long", submission.coordinates.longitude.to_string())
        .part("checkin_image", image))
}

impl<S> AttendanceGateway for HttpAttendanceGateway<S>
where
    S: SessionRepository + Sync,
{
    async fn submit(&self, submission: &Submission) -> AttendanceResult<SubmissionReceipt> {
        let session = self.session().await?;
        let url = self.client.method_url(&self.checkin_method);
        let fail = |e: HttpError| AttendanceError::gateway(e, SUBMIT_FAILED_MESSAGE);

        tracing::debug!(
            url = %url,
            employee = %submission.employee_id,
            bytes = submission.image.len(),
            "Submitting check-in"
        );

        let form = form_for(submission).map_err(fail)?;
        let response = self
            .client
            .http()
            .post(&url)
            .header(AUTHORIZATION, session.authorization_header())
            .multipart(form)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;
        let body: ReceiptResponse = read_json(response).await.map_err(fail)?;

        Ok(body.into_inner())
    }

    async fn checkout(
        &self,
        employee_id: &EmployeeId,
        coordinates: Option<Coordinates>,
    ) -> AttendanceResult<SubmissionReceipt> {
        let session = self.session().await?;
        let url = self.client.method_url(&self.checkout_method);
        let fail = |e: HttpError| AttendanceError::gateway(e, CHECKOUT_FAILED_MESSAGE);

        let body = CheckoutRequest {
            employee_id: employee_id.as_str(),
            lat: coordinates.map(|c| c.latitude),
            long: coordinates.map(|c| c.longitude),
        };

        tracing::debug!(url = %url, employee = %employee_id, "Submitting checkout");

        let response = self
            .client
            .http()
            .post(&url)
            .header(AUTHORIZATION, session.authorization_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;
        let body: ReceiptResponse = read_json(response).await.map_err(fail)?;

        Ok(body.into_inner())
    }
}

impl<S> LogQueryService for HttpAttendanceGateway<S>
where
    S: SessionRepository + Sync,
{
    async fn fetch_logs(&self, query: &LogQuery) -> AttendanceResult<Vec<AttendanceLog>> {
        let session = self.session().await?;
        let url = self.client.method_url(&self.logs_method);
        let fail = |e: HttpError| AttendanceError::gateway(e, LOGS_FAILED_MESSAGE);

        let params = LogsQuery {
            employee: query.employee.as_str(),
            custom_attendance_status: query.status.as_deref(),
            limit: query.limit,
        };

        let response = self
            .client
            .http()
            .get(&url)
            .header(AUTHORIZATION, session.authorization_header())
            .query(&params)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;
        let body: LogsResponse = read_json(response).await.map_err(fail)?;

        Ok(body.into_inner().logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::from_data_url;

    #[test]
    fn test_form_for_accepts_decoded_frame() {
        let (mime, image) = from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        let submission = Submission {
            employee_id: EmployeeId::new("E1").unwrap(),
            coordinates: Coordinates::new(12.9, 77.6, None),
            image,
            mime,
        };

        let form = form_for(&submission).unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn test_form_for_rejects_bad_mime() {
        let submission = Submission {
            employee_id: EmployeeId::new("E1").unwrap(),
            coordinates: Coordinates::new(0.0, 0.0, None),
            image: vec![1, 2, 3],
            mime: "not a mime".into(),
        };

        assert!(form_for(&submission).is_err());
    }
}
