use async_trait::async_trait;
use reqwest::Client;

use crate::{
    models::{
        error::ClientError,
        news::{Category, DateFilter, NewsResult, QueryParams},
    },
    utils::resolver::NewsResolver,
};

/// Where the portal gets its results from.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch(&self, params: &QueryParams) -> Result<NewsResult, ClientError>;
}

/// Talks to a running proxy over `GET /api/news`.
#[derive(Clone)]
pub struct HttpNewsSource {
    http_client: Client,
    endpoint: String,
}

impl HttpNewsSource {
    pub fn new(http_client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    /// Defaults are left out of the query string.
    pub fn request_pairs(params: &QueryParams) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", params.page.to_string()),
            ("size", params.page_size.to_string()),
        ];
        if let Some(query) = params.search_text() {
            pairs.push(("q", query.to_string()));
        }
        if params.category != Category::All {
            pairs.push(("category", params.category.as_str().to_string()));
        }
        if params.date_filter != DateFilter::All {
            pairs.push(("date", params.date_filter.as_str().to_string()));
        }
        if params.demo {
            pairs.push(("demo", "true".to_string()));
        }
        pairs
    }
}

#[async_trait]
impl NewsSource for HttpNewsSource {
    async fn fetch(&self, params: &QueryParams) -> Result<NewsResult, ClientError> {
        let res = self
            .http_client
            .get(&self.endpoint)
            .query(&Self::request_pairs(params))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(res.json::<NewsResult>().await?)
    }
}

#[async_trait]
impl NewsSource for NewsResolver {
    async fn fetch(&self, params: &QueryParams) -> Result<NewsResult, ClientError> {
        Ok(self.resolve(params).await)
    }
}
