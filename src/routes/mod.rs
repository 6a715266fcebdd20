pub mod news;
use axum::{response::IntoResponse, routing::get, Json, Router};
use http::{header, Method, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
pub use news::news_routes;

use crate::utils::state::AppState;

pub fn make_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health_check))
        .nest("/api", news_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "ok"}))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::Config;
    use axum::body::Body;
    use http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config::from_lookup(|_| None);
        make_app(Arc::new(AppState::init(&config)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, http::HeaderMap, Vec<u8>) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, body.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_responds() {
        let (status, _, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "ok");
    }

    #[tokio::test]
    async fn explicit_demo_request() {
        let (status, _, body) = send(get("/api/news?demo=true&size=2")).await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["source"], "demo");
        assert_eq!(body["articles"].as_array().unwrap().len(), 2);
        assert_eq!(body["totalResults"], 2);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn unknown_category_serves_full_demo_catalog() {
        let (status, _, body) = send(get("/api/news?category=politics&demo=true")).await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["source"], "demo");
        assert_eq!(body["articles"].as_array().unwrap().len(), 6);
        assert_eq!(body["totalResults"], 6);
    }

    #[tokio::test]
    async fn upstream_failure_still_answers_200() {
        let (status, _, body) = send(get("/api/news?category=sports&page=2")).await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["source"], "demo");
        assert_eq!(body["articles"].as_array().unwrap().len(), 1);
        assert!(body["message"].as_str().unwrap().contains("no API key"));
    }

    #[tokio::test]
    async fn options_returns_empty_200() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/news")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/news")
            .header(header::ORIGIN, "https://reader.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn any_origin_may_read() {
        let request = Request::builder()
            .method("GET")
            .uri("/api/news?demo=true")
            .header(header::ORIGIN, "https://reader.example")
            .body(Body::empty())
            .unwrap();
        let (_, headers, _) = send(request).await;
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn other_methods_are_rejected() {
        for method in ["POST", "PUT", "DELETE"] {
            let request = Request::builder()
                .method(method)
                .uri("/api/news")
                .body(Body::empty())
                .unwrap();
            let (status, _, body) = send(request).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

            let body: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body, json!({"error": "Method not allowed"}));
        }
    }
}
