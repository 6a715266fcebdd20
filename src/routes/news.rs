use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::news::{get_news, method_not_allowed, news_preflight},
    utils::state::AppState,
};

pub fn news_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/news",
        get(get_news)
            .options(news_preflight)
            .fallback(method_not_allowed),
    )
}
