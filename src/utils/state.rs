use reqwest::Client;

use crate::utils::{config::Config, news_api::NewsApiClient, resolver::NewsResolver};

#[derive(Clone)]
pub struct AppState {
    pub resolver: NewsResolver,
}

impl AppState {
    pub fn init(config: &Config) -> Self {
        let http_client = Client::new();
        let api = NewsApiClient::new(
            http_client,
            config.news_api_base_url.clone(),
            config.news_api_key.clone(),
        );

        AppState {
            resolver: NewsResolver::new(api),
        }
    }
}
