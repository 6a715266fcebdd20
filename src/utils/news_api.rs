use reqwest::Client;
use tracing::debug;

use crate::{
    models::{
        error::UpstreamError,
        news::{Category, QueryParams, UpstreamResponse},
    },
    utils::date_filter::DateBound,
};

pub const SEARCH_LANGUAGE: &str = "ru";
pub const HEADLINES_COUNTRY: &str = "ru";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Free-text search over all articles.
    Search { query: String, from: Option<String> },
    TopHeadlines { category: Option<Category> },
}

/// One upstream call, fully resolved from the caller's params.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub endpoint: Endpoint,
    pub page: u32,
    pub page_size: u32,
}

impl UpstreamRequest {
    pub fn build(params: &QueryParams, bound: Option<DateBound>) -> Self {
        let endpoint = match params.search_text() {
            Some(query) => Endpoint::Search {
                query: query.to_string(),
                from: bound.map(|b| b.query_value()),
            },
            None => Endpoint::TopHeadlines {
                category: Some(params.category).filter(|c| *c != Category::All),
            },
        };

        Self {
            endpoint,
            page: params.page,
            page_size: params.page_size,
        }
    }

    pub fn path(&self) -> &'static str {
        match self.endpoint {
            Endpoint::Search { .. } => "everything",
            Endpoint::TopHeadlines { .. } => "top-headlines",
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        match &self.endpoint {
            Endpoint::Search { query, from } => {
                pairs.push(("q", query.clone()));
                pairs.push(("language", SEARCH_LANGUAGE.to_string()));
                if let Some(from) = from {
                    pairs.push(("from", from.clone()));
                }
            }
            Endpoint::TopHeadlines { category } => {
                pairs.push(("country", HEADLINES_COUNTRY.to_string()));
                if let Some(category) = category {
                    pairs.push(("category", category.as_str().to_string()));
                }
            }
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("pageSize", self.page_size.to_string()));
        pairs
    }
}

#[derive(Clone)]
pub struct NewsApiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    pub fn new(http_client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Issues exactly one GET. A non-2xx status or an `"error"` payload
    /// status are both upstream errors.
    pub async fn fetch(
        &self,
        request: &UpstreamRequest,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::MissingApiKey)?;
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), request.path());
        let query = request.query_pairs();

        debug!(%url, ?query, "Fetching from news API");

        let res = self
            .http_client
            .get(&url)
            .query(&query)
            .header("User-Agent", "NewsPortal/1.0")
            .header("X-Api-Key", api_key)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let payload: UpstreamResponse = res.json().await?;
        if payload.is_error() {
            let reason = payload
                .message
                .or(payload.code)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(UpstreamError::Api(reason));
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::news::DateFilter;
    use chrono::{TimeZone, Utc};

    fn params(query: Option<&str>, category: Category, date_filter: DateFilter) -> QueryParams {
        QueryParams {
            query: query.map(str::to_string),
            category,
            date_filter,
            page: 2,
            page_size: 30,
            demo: false,
        }
    }

    #[test]
    fn search_variant_carries_language_and_date_bound() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
        let p = params(Some("mars"), Category::Sports, DateFilter::Week);
        let request = UpstreamRequest::build(&p, DateBound::compute(p.date_filter, now));

        assert_eq!(request.path(), "everything");
        assert_eq!(
            request.query_pairs(),
            vec![
                ("q", "mars".to_string()),
                ("language", "ru".to_string()),
                ("from", "2026-10-09".to_string()),
                ("page", "2".to_string()),
                ("pageSize", "30".to_string()),
            ]
        );
    }

    #[test]
    fn headlines_variant_scopes_country_and_category() {
        let p = params(None, Category::Health, DateFilter::Today);
        let request = UpstreamRequest::build(&p, DateBound::compute(p.date_filter, Utc::now()));

        assert_eq!(request.path(), "top-headlines");
        assert_eq!(
            request.query_pairs(),
            vec![
                ("country", "ru".to_string()),
                ("category", "health".to_string()),
                ("page", "2".to_string()),
                ("pageSize", "30".to_string()),
            ]
        );
    }

    #[test]
    fn headlines_without_category_filter() {
        let request = UpstreamRequest::build(&params(None, Category::All, DateFilter::All), None);
        assert_eq!(request.endpoint, Endpoint::TopHeadlines { category: None });
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let client = NewsApiClient::new(Client::new(), "http://127.0.0.1:9", None);
        let request = UpstreamRequest::build(&QueryParams::default(), None);

        let err = client.fetch(&request).await.unwrap_err();
        assert!(matches!(err, UpstreamError::MissingApiKey));
    }
}
