use std::{collections::HashMap, sync::Arc};

use crate::{
    models::{error::Error, news::QueryParams},
    utils::state::AppState,
};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use tracing::debug;

/// Always answers 200: upstream trouble is reported through a demo result.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let params = QueryParams::from_query(&raw);
    debug!(?params, "Resolving news request");

    let result = state.resolver.resolve(&params).await;

    (StatusCode::OK, Json(result)).into_response()
}

pub async fn news_preflight() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn method_not_allowed() -> Error {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into()
}
