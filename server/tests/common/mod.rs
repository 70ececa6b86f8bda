// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Shared helpers: an app on a random port and an in-process fake of the Google APIs.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Json, Router};
use serde_json::{Value, json};
use server::AppState;
use server::config::ServerConfig;
use server::transport::app_router;
use sheets_auth::crypto::RsaSigner;
use tokio::net::TcpListener;

pub const ACCESS_TOKEN: &str = "ya29.test-token";
pub const SHEET_ID: &str = "test-sheet";
pub const CLIENT_EMAIL: &str = "club-bot@tech-tribe.iam.gserviceaccount.com";

/// One `values:append` call as seen by the fake API.
#[derive(Clone, Debug)]
pub struct AppendCall {
    pub sheet_id: String,
    pub target: String,
    pub query: HashMap<String, String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Default)]
pub struct FakeGoogle {
    pub appends: Arc<Mutex<Vec<AppendCall>>>,
    pub assertions: Arc<Mutex<Vec<String>>>,
    pub reject_token: bool,
    pub fail_append: bool,
}

impl FakeGoogle {
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.appends
            .lock()
            .unwrap()
            .iter()
            .flat_map(|call| call.rows.clone())
            .collect()
    }
}

async fn token(State(google): State<FakeGoogle>, Form(form): Form<HashMap<String, String>>) -> Response {
    if google.reject_token {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_grant", "error_description": "Invalid JWT Signature."})),
        )
            .into_response();
    }
    if form.get("grant_type").map(String::as_str)
        != Some("urn:ietf:params:oauth:grant-type:jwt-bearer")
    {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "unsupported_grant_type"})))
            .into_response();
    }

    let assertion = form.get("assertion").cloned().unwrap_or_default();
    google.assertions.lock().unwrap().push(assertion);

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "expires_in": 3599,
        "token_type": "Bearer",
    }))
    .into_response()
}

async fn append(
    State(google): State<FakeGoogle>,
    Path((sheet_id, target)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let bearer = format!("Bearer {ACCESS_TOKEN}");
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(bearer.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"code": 401, "message": "Request had invalid authentication credentials."}})),
        )
            .into_response();
    }
    if google.fail_append {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": {
                "code": 403,
                "message": "The caller does not have permission",
                "status": "PERMISSION_DENIED",
            }})),
        )
            .into_response();
    }

    let rows: Vec<Vec<String>> = serde_json::from_value(body["values"].clone()).unwrap_or_default();
    let updated_rows = rows.len();
    google.appends.lock().unwrap().push(AppendCall {
        sheet_id: sheet_id.clone(),
        target,
        query,
        rows,
    });

    Json(json!({
        "spreadsheetId": sheet_id,
        "tableRange": "Sheet1!A1:F2",
        "updates": {
            "spreadsheetId": sheet_id,
            "updatedRange": "Sheet1!A3:F3",
            "updatedRows": updated_rows,
            "updatedColumns": 6,
            "updatedCells": updated_rows * 6,
        }
    }))
    .into_response()
}

/// Serve `router` on a random local port from its own runtime; returns the base URL.
pub fn spawn_router(router: Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind random port");
            let port = listener.local_addr().unwrap().port();
            tx.send(format!("http://127.0.0.1:{port}")).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });
    rx.recv().unwrap()
}

pub fn spawn_google(google: FakeGoogle) -> String {
    let router = Router::new()
        .route("/token", post(token))
        .route("/v4/spreadsheets/{sheet_id}/values/{target}", post(append))
        .with_state(google);
    spawn_router(router)
}

/// Config pointing at the fake API, with no credentials set.
pub fn config_for(google_url: &str) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.google.sheet_id = Some(SHEET_ID.to_owned());
    config.google.token_uri = format!("{google_url}/token");
    config.google.api_base_url = google_url.to_owned();
    config
}

/// Split-field credentials, with the key mangled the way dashboards store it.
pub fn with_split_credentials(mut config: ServerConfig, signer: &RsaSigner) -> ServerConfig {
    let pem = signer.privkey_pem().expect("Failed to export key");
    config.google.service_account_email = Some(CLIENT_EMAIL.to_owned());
    config.google.private_key = Some(format!("\"{}\"", pem.replace('\n', "\\n")));
    config
}

pub fn spawn_app(config: ServerConfig) -> String {
    spawn_router(app_router(Arc::new(AppState::new(config))))
}
