use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
}

pub type Seen = Arc<Mutex<Vec<SeenRequest>>>;

#[derive(Clone)]
struct StubState {
    seen: Seen,
    status: StatusCode,
    body: Value,
}

async fn respond(
    State(stub): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    stub.seen.lock().unwrap().push(SeenRequest {
        path: uri.path().trim_start_matches('/').to_string(),
        query,
        api_key: headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    (stub.status, Json(stub.body))
}

pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

/// Fake news API answering both endpoints with a fixed status and body.
pub async fn serve_upstream(status: StatusCode, body: Value) -> (Seen, String) {
    let seen = Seen::default();
    let router = Router::new()
        .route("/everything", get(respond))
        .route("/top-headlines", get(respond))
        .with_state(StubState {
            seen: seen.clone(),
            status,
            body,
        });
    (seen, spawn_server(router).await)
}

/// A URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn upstream_article(title: &str, published_at: Option<DateTime<Utc>>) -> Value {
    json!({
        "source": { "id": null, "name": "Wire" },
        "title": title,
        "description": format!("{title} in detail"),
        "url": format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        "urlToImage": null,
        "publishedAt": published_at.map(|ts| ts.to_rfc3339()),
    })
}

pub fn upstream_payload(articles: Vec<Value>, total_results: Option<u64>) -> Value {
    json!({
        "status": "ok",
        "totalResults": total_results,
        "articles": articles,
    })
}
