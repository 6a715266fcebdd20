use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"error": message})),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

/// Why a call to the upstream news API did not produce articles. The
/// `Display` text is what callers see in the demo fallback message.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("News API unavailable: no API key configured")]
    MissingApiKey,
    #[error("News API unavailable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("News API error: HTTP {0}")]
    Status(u16),
    #[error("News API returned an error: {0}")]
    Api(String),
}

/// Failure of a client-side request against the news proxy.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("news service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("news service responded with HTTP {0}")]
    Status(u16),
}
