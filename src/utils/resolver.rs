use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{
    models::news::{Article, NewsResult, Origin, QueryParams, ResultStatus},
    utils::{
        date_filter::{filter_articles, DateBound},
        demo::{demo_result, DEMO_MESSAGE},
        news_api::{NewsApiClient, UpstreamRequest},
    },
};

/// Turns a request's params into a `NewsResult`. Never fails: every upstream
/// problem is folded into a demo-origin result whose message names the cause.
#[derive(Clone)]
pub struct NewsResolver {
    api: NewsApiClient,
}

impl NewsResolver {
    pub fn new(api: NewsApiClient) -> Self {
        Self { api }
    }

    pub async fn resolve(&self, params: &QueryParams) -> NewsResult {
        self.resolve_at(params, Utc::now()).await
    }

    pub async fn resolve_at(&self, params: &QueryParams, now: DateTime<Utc>) -> NewsResult {
        if params.demo {
            info!(category = params.category.as_str(), "Demo data requested");
            return demo_result(
                params.category,
                params.page_size,
                now,
                DEMO_MESSAGE.to_string(),
            );
        }

        let bound = DateBound::compute(params.date_filter, now);
        let request = UpstreamRequest::build(params, bound);

        match self.api.fetch(&request).await {
            Ok(payload) => {
                let articles: Vec<Article> =
                    payload.articles.into_iter().map(Article::from).collect();
                let articles = filter_articles(articles, bound);
                let total_results = payload
                    .total_results
                    .filter(|total| *total > 0)
                    .unwrap_or(articles.len() as u64);

                info!(
                    endpoint = request.path(),
                    count = articles.len(),
                    total_results,
                    "News API request succeeded"
                );

                NewsResult {
                    status: ResultStatus::Success,
                    origin: Origin::Upstream,
                    total_results,
                    articles,
                    page: params.page,
                    page_size: params.page_size,
                    message: None,
                }
            }
            Err(err) => {
                warn!(endpoint = request.path(), error = %err, "Serving demo data");
                demo_result(
                    params.category,
                    params.page_size,
                    now,
                    format!("{err}. Showing demo data."),
                )
            }
        }
    }
}
