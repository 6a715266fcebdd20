pub mod config;
pub mod date_filter;
pub mod demo;
pub mod logging;
pub mod news_api;
pub mod resolver;
pub mod state;
#[cfg(test)]
pub mod test_support;
