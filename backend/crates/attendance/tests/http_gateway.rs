//! HTTP gateway against an in-process ERP stand-in

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use attendance::domain::entities::Submission;
use attendance::domain::repository::{AttendanceGateway, LogQuery, LogQueryService};
use attendance::domain::value_objects::{Coordinates, LogType};
use attendance::error::{AttendanceError, SUBMIT_FAILED_MESSAGE};
use attendance::{AttendanceConfig, ErrorKind, HttpAttendanceGateway};
use auth::{EmployeeId, KvSessionRepository, Session, SessionRepository};
use axum::extract::{Multipart, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use platform::secret::SecretString;
use platform::storage::MemoryStore;
use serde_json::{Value, json};

const CHECKIN: &str = "/api/method/erp_attendance.api.log_employee_checkin";
const CHECKOUT: &str = "/api/method/erp_attendance.api.log_employee_checkout";
const LOGS: &str = "/api/method/erp_attendance.api.get_employee_checkin_logs";

#[derive(Debug, Clone)]
struct UploadedField {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

#[derive(Debug, Default)]
struct Recorded {
    hits: usize,
    authorization: Option<String>,
    fields: Vec<UploadedField>,
    json: Option<Value>,
    query: Option<HashMap<String, String>>,
}

type Shared = Arc<Mutex<Recorded>>;

fn remember_auth(state: &Shared, headers: &HeaderMap) {
    let mut recorded = state.lock().unwrap();
    recorded.hits += 1;
    recorded.authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
}

async fn checkin_ok(
    State(state): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Json<Value> {
    remember_auth(&state, &headers);
    while let Some(field) = multipart.next_field().await.unwrap() {
        let uploaded = UploadedField {
            name: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            bytes: field.bytes().await.unwrap().to_vec(),
        };
        state.lock().unwrap().fields.push(uploaded);
    }

    Json(json!({
        "message": {
            "message": "Check-in recorded",
            "checkin_details": {
                "name": "EMP-CKIN-0001",
                "employee": "E1",
                "time": "2025-06-02 09:00:00",
                "latitude": 12.9,
                "longitude": 77.6
            }
        }
    }))
}

async fn checkin_rejected(State(state): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    remember_auth(&state, &headers);
    (
        StatusCode::EXPECTATION_FAILED,
        Json(json!({
            "exc_type": "ValidationError",
            "_server_messages": "[\"{\\\"message\\\": \\\"You have already checked in today\\\"}\"]"
        })),
    )
}

async fn checkin_broken(State(state): State<Shared>, headers: HeaderMap) -> impl IntoResponse {
    remember_auth(&state, &headers);
    (StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>")
}

async fn checkout(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    remember_auth(&state, &headers);
    state.lock().unwrap().json = Some(body);
    Json(json!({ "message": "Checked out" }))
}

async fn logs(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    remember_auth(&state, &headers);
    state.lock().unwrap().query = Some(query);
    Json(json!({
        "message": {
            "message": "Logs fetched",
            "logs": [
                {
                    "name": "EMP-CKIN-0001",
                    "employee": "E1",
                    "employee_name": "Jane Doe",
                    "log_type": "IN",
                    "time": "2025-06-02 09:00:00",
                    "latitude": 12.9,
                    "longitude": 77.6,
                    "custom_attendance_status": "On Time",
                    "checkin_image": "/files/checkin_image.png"
                }
            ]
        }
    }))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn signed_in_sessions() -> Arc<KvSessionRepository<MemoryStore>> {
    let sessions = Arc::new(KvSessionRepository::new(Arc::new(MemoryStore::new())));
    sessions
        .save(&Session {
            sid: "sid".into(),
            api_key: "key".into(),
            api_secret: SecretString::new("secret"),
            username: "jane".into(),
            email: "jane.doe@example.com".into(),
            employee_id: EmployeeId::new("E1").unwrap(),
            base_url: None,
        })
        .await
        .unwrap();
    sessions
}

fn gateway_for(
    base_url: String,
    sessions: Arc<KvSessionRepository<MemoryStore>>,
) -> HttpAttendanceGateway<KvSessionRepository<MemoryStore>> {
    let config = AttendanceConfig {
        base_url,
        ..AttendanceConfig::default()
    };
    HttpAttendanceGateway::new(&config, sessions).unwrap()
}

fn submission() -> Submission {
    Submission {
        employee_id: EmployeeId::new("E1").unwrap(),
        coordinates: Coordinates::new(12.9, 77.6, Some(15.0)),
        image: b"\x89PNG\r\n\x1a\n".to_vec(),
        mime: "image/png".into(),
    }
}

#[tokio::test]
async fn test_checkin_uploads_multipart_with_token() {
    let state = Shared::default();
    let base = serve(
        Router::new()
            .route(CHECKIN, post(checkin_ok))
            .with_state(state.clone()),
    )
    .await;
    let gateway = gateway_for(base, signed_in_sessions().await);

    let receipt = gateway.submit(&submission()).await.unwrap();

    assert_eq!(receipt.message, "Check-in recorded");
    assert_eq!(receipt.record.unwrap().name, "EMP-CKIN-0001");

    let recorded = state.lock().unwrap();
    assert_eq!(recorded.authorization.as_deref(), Some("token key:secret"));

    let field = |name: &str| {
        recorded
            .fields
            .iter()
            .find(|f| f.name == name)
            .cloned()
            .unwrap()
    };
    assert_eq!(field("lat").bytes, b"12.9");
    assert_eq!(field("long").bytes, b"77.6");

    let image = field("checkin_image");
    assert_eq!(image.file_name.as_deref(), Some("checkin_image.png"));
    assert_eq!(image.content_type.as_deref(), Some("image/png"));
    assert_eq!(image.bytes, b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_checkin_rejection_surfaces_server_text() {
    let state = Shared::default();
    let base = serve(
        Router::new()
            .route(CHECKIN, post(checkin_rejected))
            .with_state(state.clone()),
    )
    .await;
    let gateway = gateway_for(base, signed_in_sessions().await);

    let err = gateway.submit(&submission()).await.unwrap_err();

    assert_eq!(err.to_string(), "You have already checked in today");
    assert_eq!(err.kind(), ErrorKind::Rejected);
}

#[tokio::test]
async fn test_checkin_failure_without_text_uses_fallback() {
    let state = Shared::default();
    let base = serve(
        Router::new()
            .route(CHECKIN, post(checkin_broken))
            .with_state(state.clone()),
    )
    .await;
    let gateway = gateway_for(base, signed_in_sessions().await);

    let err = gateway.submit(&submission()).await.unwrap_err();

    assert_eq!(err.to_string(), SUBMIT_FAILED_MESSAGE);
    assert_eq!(err.kind(), ErrorKind::Server);
    assert!(!err.is_recoverable());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let gateway = gateway_for(format!("http://{addr}"), signed_in_sessions().await);

    let err = gateway.submit(&submission()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.to_string(), SUBMIT_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_requests_need_a_session() {
    let state = Shared::default();
    let base = serve(
        Router::new()
            .route(CHECKIN, post(checkin_ok))
            .with_state(state.clone()),
    )
    .await;
    let sessions = Arc::new(KvSessionRepository::new(Arc::new(MemoryStore::new())));
    let gateway = gateway_for(base, sessions);

    let err = gateway.submit(&submission()).await.unwrap_err();

    assert!(matches!(err, AttendanceError::NotAuthenticated));
    assert_eq!(state.lock().unwrap().hits, 0);
}

#[tokio::test]
async fn test_checkout_sends_json_body() {
    let state = Shared::default();
    let base = serve(
        Router::new()
            .route(CHECKOUT, post(checkout))
            .with_state(state.clone()),
    )
    .await;
    let gateway = gateway_for(base, signed_in_sessions().await);
    let e1 = EmployeeId::new("E1").unwrap();

    let receipt = gateway
        .checkout(&e1, Some(Coordinates::new(12.9, 77.6, None)))
        .await
        .unwrap();
    assert_eq!(receipt.message, "Checked out");
    assert_eq!(
        state.lock().unwrap().json.take().unwrap(),
        json!({ "employee_id": "E1", "lat": 12.9, "long": 77.6 })
    );

    gateway.checkout(&e1, None).await.unwrap();
    assert_eq!(
        state.lock().unwrap().json.take().unwrap(),
        json!({ "employee_id": "E1" })
    );
}

#[tokio::test]
async fn test_logs_query_and_wrapped_payload() {
    let state = Shared::default();
    let base = serve(Router::new().route(LOGS, get(logs)).with_state(state.clone())).await;
    let gateway = gateway_for(base, signed_in_sessions().await);

    let rows = gateway
        .fetch_logs(&LogQuery {
            employee: EmployeeId::new("E1").unwrap(),
            status: Some("On Time".into()),
            limit: 15,
        })
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].log_type, LogType::In);
    assert_eq!(rows[0].custom_attendance_status.as_deref(), Some("On Time"));
    assert_eq!(
        rows[0].image_url(gateway.base_url()).unwrap(),
        format!("{}/files/checkin_image.png", gateway.base_url())
    );

    let recorded = state.lock().unwrap();
    let query = recorded.query.as_ref().unwrap();
    assert_eq!(query.get("employee").map(String::as_str), Some("E1"));
    assert_eq!(
        query.get("custom_attendance_status").map(String::as_str),
        Some("On Time")
    );
    assert_eq!(query.get("limit").map(String::as_str), Some("15"));
    assert_eq!(recorded.authorization.as_deref(), Some("token key:secret"));
}
