//! Shared fixtures for API integration tests.
//!
//! `StubEpp` runs a throwaway EPP server on a random local port so the real
//! HTTP client is exercised end to end. `FixedSource` skips the network for
//! tests that only care about handler behavior.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

use preprints_api::params::ListParams;
use preprints_api::{AppState, Config, PreprintPage, PreprintSource, UpstreamError, router};
use preprints_core::EnhancedArticle;

pub const LIST_PATH: &str = "/api/preprints-no-content";

/// An upstream record with sensible defaults, overridable per field.
pub fn record(msid: &str, overrides: Value) -> Value {
    let mut base = json!({
        "id": format!("{msid}v1"),
        "msid": msid,
        "doi": format!("10.7554/eLife.{msid}.1"),
        "versionIdentifier": "1",
        "versionDoi": format!("10.7554/eLife.{msid}.1"),
        "preprintDoi": format!("10.1101/2023.01.01.{msid}"),
        "preprintUrl": format!("https://www.biorxiv.org/content/10.1101/2023.01.01.{msid}v1"),
        "preprintPosted": "2023-01-01T00:00:00.000Z",
        "sentForReview": "2023-01-05T00:00:00.000Z",
        "published": "2023-04-20T10:11:12.345Z",
        "subjects": ["Cell Biology"],
        "article": {
            "title": {"type": "Paragraph", "content": ["Study ", {"type": "Emphasis", "content": msid}]},
            "authors": [
                {"givenNames": ["Jane"], "familyNames": ["Doe"]},
                {"givenNames": ["John"], "familyNames": ["Smith"]}
            ],
            "licenses": [],
            "headings": [],
            "references": []
        },
        "firstPublished": "2023-03-01T08:00:00.999Z"
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in overrides {
            base.insert(k.clone(), v.clone());
        }
    }
    base
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    total: Option<String>,
    queries: Arc<Mutex<Vec<String>>>,
}

/// A stub EPP server listening on localhost.
pub struct StubEpp {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StubEpp {
    /// Serve `records` with an optional `x-total-count` header.
    pub async fn start(records: Vec<Value>, total: Option<&str>) -> Self {
        Self::start_raw(StatusCode::OK, Value::Array(records).to_string(), total).await
    }

    /// Serve an arbitrary status and body.
    pub async fn start_raw(status: StatusCode, body: String, total: Option<&str>) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body,
            total: total.map(str::to_string),
            queries: queries.clone(),
        };

        let app = Router::new()
            .route(LIST_PATH, get(serve_list))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub EPP server");
        let addr = listener.local_addr().expect("Failed to read stub address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Stub EPP server failed");
        });

        Self { addr, queries }
    }

    /// Query strings received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn config(&self) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            epp_server_uri: format!("http://{}", self.addr),
            epp_list_path: LIST_PATH.to_string(),
            epp_timeout: Some(Duration::from_secs(5)),
        }
    }

    /// Test server for the API, wired to this stub.
    pub fn server(&self) -> axum_test::TestServer {
        let state = AppState::new(self.config()).expect("Failed to build app state");
        test_server(state)
    }
}

async fn serve_list(State(state): State<StubState>, RawQuery(query): RawQuery) -> Response {
    state
        .queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());

    let mut headers = HeaderMap::new();
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    if let Some(total) = &state.total {
        headers.insert(
            "x-total-count",
            HeaderValue::from_str(total).expect("valid header value"),
        );
    }

    (state.status, headers, state.body).into_response()
}

/// In-memory record source that remembers the parameters it was asked for.
#[derive(Default)]
pub struct FixedSource {
    pub total: u64,
    pub items: Vec<Value>,
    pub calls: Mutex<Vec<ListParams>>,
}

impl FixedSource {
    pub fn new(total: u64, items: Vec<Value>) -> Self {
        Self {
            total,
            items,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PreprintSource for FixedSource {
    async fn fetch_list(&self, params: &ListParams) -> Result<PreprintPage, UpstreamError> {
        self.calls.lock().unwrap().push(params.clone());
        let items: Vec<EnhancedArticle> = self
            .items
            .iter()
            .map(|v| serde_json::from_value(v.clone()).expect("fixture should parse"))
            .collect();
        Ok(PreprintPage {
            total: self.total,
            items,
        })
    }
}

/// Test server backed by an in-memory source.
pub fn fixed_server(source: Arc<FixedSource>) -> axum_test::TestServer {
    let config = Config {
        bind_addr: "127.0.0.1:0".to_string(),
        epp_server_uri: "http://unused".to_string(),
        epp_list_path: LIST_PATH.to_string(),
        epp_timeout: None,
    };
    test_server(AppState::with_source(config, source))
}

fn test_server(state: AppState) -> axum_test::TestServer {
    axum_test::TestServer::builder()
        .build(router(state))
}
