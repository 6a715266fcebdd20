use std::{error::Error, sync::Arc};

use axum::serve;
use news_portal::{
    routes::make_app,
    utils::{config::Config, logging::init_tracing, state::AppState},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init();
    init_tracing(&config.log_level);

    info!("Initializing application...");
    if config.news_api_key.is_none() {
        warn!("NEWS_API_KEY not set, every request will be answered with demo data");
    }
    info!(?config, "Configuration loaded successfully");

    let app = make_app(Arc::new(AppState::init(&config)));
    info!("Application initialized successfully");

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on http://{}", config.bind_addr);

    serve(listener, app).await?;
    Ok(())
}
