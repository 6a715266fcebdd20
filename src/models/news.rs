use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Business,
    Technology,
    Sports,
    Science,
    Health,
    Entertainment,
}

impl Category {
    /// Unknown values fall back to `All`, which disables category filtering.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "business" => Category::Business,
            "technology" => Category::Technology,
            "sports" => Category::Sports,
            "science" => Category::Science,
            "health" => Category::Health,
            "entertainment" => Category::Entertainment,
            _ => Category::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Science => "science",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateFilter {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "today" => DateFilter::Today,
            "week" => DateFilter::Week,
            "month" => DateFilter::Month,
            _ => DateFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
        }
    }
}

/// A single request's worth of search input, built fresh from caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub query: Option<String>,
    pub category: Category,
    pub date_filter: DateFilter,
    pub page: u32,
    pub page_size: u32,
    pub demo: bool,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            query: None,
            category: Category::All,
            date_filter: DateFilter::All,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            demo: false,
        }
    }
}

impl QueryParams {
    /// Builds params from the raw `q`, `category`, `date`, `page`, `size` and
    /// `demo` query string values. Malformed values degrade to defaults.
    pub fn from_query(raw: &HashMap<String, String>) -> Self {
        let query = raw
            .get("q")
            .filter(|q| !q.trim().is_empty())
            .cloned();

        Self {
            query,
            category: raw
                .get("category")
                .map(|c| Category::parse(c))
                .unwrap_or_default(),
            date_filter: raw
                .get("date")
                .map(|d| DateFilter::parse(d))
                .unwrap_or_default(),
            page: parse_page(raw.get("page").map(String::as_str)),
            page_size: clamp_page_size(raw.get("size").map(String::as_str)),
            demo: raw.get("demo").is_some_and(|d| d == "true"),
        }
    }

    pub fn search_text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }
}

pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
        .unwrap_or(DEFAULT_PAGE)
}

pub fn clamp_page_size(raw: Option<&str>) -> u32 {
    match raw.and_then(|s| s.trim().parse::<i64>().ok()) {
        Some(size) if size > i64::from(MAX_PAGE_SIZE) => MAX_PAGE_SIZE,
        Some(size) if size >= 1 => size as u32,
        _ => DEFAULT_PAGE_SIZE,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub source: ArticleSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "newsapi", alias = "upstream")]
    Upstream,
    #[serde(rename = "demo")]
    Demo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResult {
    pub status: ResultStatus,
    #[serde(rename = "source")]
    pub origin: Origin,
    pub total_results: u64,
    pub articles: Vec<Article>,
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Wire shapes of the upstream news API. Fields are decoded leniently: a
// value of the wrong type reads as absent instead of failing the page.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_results: Option<u64>,
    #[serde(default, deserialize_with = "lenient_articles")]
    pub articles: Vec<UpstreamArticle>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

impl UpstreamResponse {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamArticle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url_to_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_source")]
    pub source: Option<UpstreamSource>,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamSource {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_u64())
}

fn lenient_source<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<UpstreamSource>, D::Error> {
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

/// Entries that are not objects are skipped.
fn lenient_articles<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<UpstreamArticle>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

impl From<UpstreamArticle> for Article {
    fn from(article: UpstreamArticle) -> Self {
        let published_at = article
            .published_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc));

        Article {
            title: article.title.unwrap_or_default(),
            description: article.description,
            url: article.url,
            image_url: article.url_to_image,
            published_at,
            source: ArticleSource {
                name: article.source.and_then(|s| s.name).unwrap_or_default(),
            },
        }
    }
}
