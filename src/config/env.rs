use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub x_api: XApiConfig,
    pub feed: FeedConfig,
    pub http: HttpConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub timezone: String,
}

#[derive(Debug, Clone)]
pub struct XApiConfig {
    pub bearer_token: Option<String>,
    pub base_url: Url,
    pub max_results: u32,
    pub trend_woeid: u32,
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: Url,
    pub timeout: Duration,
    pub max_items: usize,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL in {key}: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}
