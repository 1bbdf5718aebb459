#![allow(dead_code)]

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::post,
};
use serde_json::{Value, json};
use shared::service::auth::JWT_BEARER_GRANT;
use std::{
    collections::HashMap,
    net::SocketAddr,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use tempfile::TempDir;

pub const ACCESS_TOKEN: &str = "ya29.test-access-token";

const PRIVATE_PEM: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../shared/testdata/service_account.pem"
));

pub struct FakeState {
    pub report_status: StatusCode,
    pub report: Value,
    pub reject_token: bool,
    pub token_requests: AtomicUsize,
    pub report_requests: Mutex<Vec<Value>>,
}

/// Token endpoint and reporting API on an ephemeral local port.
pub struct FakeGoogle {
    pub addr: SocketAddr,
    pub state: Arc<FakeState>,
    pub dir: TempDir,
}

impl FakeGoogle {
    pub async fn start(report_status: StatusCode, report: Value, reject_token: bool) -> Self {
        let state = Arc::new(FakeState {
            report_status,
            report,
            reject_token,
            token_requests: AtomicUsize::new(0),
            report_requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/token", post(token))
            .route("/v4/batchGet", post(batch_get))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub async fn with_report(total: &str, top: Option<&str>) -> Self {
        Self::start(StatusCode::OK, report_body(total, top), false).await
    }

    pub fn reporting_url(&self) -> String {
        format!("http://{}/v4/batchGet", self.addr)
    }

    /// Writes a service-account key whose `token_uri` points at this server.
    pub fn write_key_file(&self) -> PathBuf {
        let path = self.dir.path().join("analytics_auth.json");
        let key = json!({
            "type": "service_account",
            "project_id": "dupechecker-test",
            "private_key_id": "test-key-1",
            "private_key": PRIVATE_PEM,
            "client_email": "dupechecker@dupechecker-test.iam.gserviceaccount.com",
            "token_uri": format!("http://{}/token", self.addr),
        });
        std::fs::write(&path, serde_json::to_vec_pretty(&key).unwrap()).unwrap();
        path
    }

    pub fn token_requests(&self) -> usize {
        self.state.token_requests.load(Ordering::SeqCst)
    }

    pub fn report_requests(&self) -> Vec<Value> {
        self.state.report_requests.lock().unwrap().clone()
    }
}

pub fn report_body(total: &str, top: Option<&str>) -> Value {
    let rows = match top {
        Some(count) => json!([{"dimensions": ["T-1001"], "metrics": [{"values": [count]}]}]),
        None => json!([]),
    };
    json!({
        "reports": [{
            "columnHeader": {
                "dimensions": ["ga:transactionId"],
                "metricHeader": {"metricHeaderEntries": [{"name": "ga:transactions", "type": "INTEGER"}]}
            },
            "data": {"rows": rows, "totals": [{"values": [total]}]}
        }]
    })
}

async fn token(
    State(state): State<Arc<FakeState>>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.token_requests.fetch_add(1, Ordering::SeqCst);

    let grant_ok = form.get("grant_type").map(String::as_str) == Some(JWT_BEARER_GRANT);
    if state.reject_token || !grant_ok || !form.contains_key("assertion") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_grant", "error_description": "Invalid JWT Signature."})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({"access_token": ACCESS_TOKEN, "token_type": "Bearer", "expires_in": 3599})),
    )
}

async fn batch_get(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.report_requests.lock().unwrap().push(body);

    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {ACCESS_TOKEN}"));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"code": 401, "status": "UNAUTHENTICATED"}})),
        );
    }

    (state.report_status, Json(state.report.clone()))
}
