use std::{env, time::Duration};

use url::Url;

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, FeedConfig, HttpConfig, LoggingConfig, XApiConfig,
};

const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/";
const DEFAULT_FEED_URL: &str = "https://news.yahoo.co.jp/rss/topics/top-picks.xml";
const DEFAULT_TREND_WOEID: u32 = 23_424_856;
// Accepted range of the recent-search `max_results` parameter.
const MAX_RESULTS_RANGE: (u32, u32) = (10, 100);

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let x_api = XApiConfig {
            bearer_token: get("X_BEARER_TOKEN"),
            base_url: parse_base_url(
                "X_API_BASE_URL",
                get("X_API_BASE_URL").as_deref().unwrap_or(DEFAULT_API_BASE_URL),
            )?,
            max_results: get("X_MAX_RESULTS")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(MAX_RESULTS_RANGE.1)
                .clamp(MAX_RESULTS_RANGE.0, MAX_RESULTS_RANGE.1),
            trend_woeid: get("TREND_WOEID")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(DEFAULT_TREND_WOEID),
        };

        let feed_url = get("FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        let feed = FeedConfig {
            url: Url::parse(&feed_url).map_err(|source| ConfigError::InvalidUrl {
                key: "FEED_URL",
                source,
            })?,
            timeout: Duration::from_millis(
                get("FEED_TIMEOUT_MS")
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(5_000),
            ),
            max_items: get("FEED_MAX_ITEMS")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(5),
        };

        let http = HttpConfig {
            timeout: Duration::from_millis(
                get("HTTP_TIMEOUT_MS")
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(15_000),
            ),
        };

        let directories = DirectoryConfig {
            logs_dir: get("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        let timezone = get("APP_TIMEZONE").unwrap_or_else(|| "Asia/Tokyo".to_string());

        Ok(Self {
            x_api,
            feed,
            http,
            directories,
            logging,
            timezone,
        })
    }
}

// Endpoint paths are joined onto the base, so it must end in '/'.
fn parse_base_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let mut value = raw.to_string();
    if !value.ends_with('/') {
        value.push('/');
    }
    Url::parse(&value).map_err(|source| ConfigError::InvalidUrl { key, source })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = load(&[]).expect("defaults are valid");
        assert!(config.x_api.bearer_token.is_none());
        assert_eq!(config.x_api.base_url.as_str(), DEFAULT_API_BASE_URL);
        assert_eq!(config.x_api.max_results, 100);
        assert_eq!(config.x_api.trend_woeid, DEFAULT_TREND_WOEID);
        assert_eq!(config.feed.url.as_str(), DEFAULT_FEED_URL);
        assert_eq!(config.feed.timeout, Duration::from_secs(5));
        assert_eq!(config.feed.max_items, 5);
        assert_eq!(config.timezone, "Asia/Tokyo");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn token_is_trimmed_and_blank_means_unset() {
        let config = load(&[("X_BEARER_TOKEN", "  abc123 \n")]).unwrap();
        assert_eq!(config.x_api.bearer_token.as_deref(), Some("abc123"));

        let config = load(&[("X_BEARER_TOKEN", "   ")]).unwrap();
        assert!(config.x_api.bearer_token.is_none());
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let config = load(&[("X_API_BASE_URL", "http://localhost:8080/mock")]).unwrap();
        assert_eq!(config.x_api.base_url.as_str(), "http://localhost:8080/mock/");
        let joined = config.x_api.base_url.join("2/tweets/search/recent").unwrap();
        assert_eq!(
            joined.as_str(),
            "http://localhost:8080/mock/2/tweets/search/recent"
        );
    }

    #[test]
    fn max_results_is_clamped() {
        assert_eq!(load(&[("X_MAX_RESULTS", "500")]).unwrap().x_api.max_results, 100);
        assert_eq!(load(&[("X_MAX_RESULTS", "1")]).unwrap().x_api.max_results, 10);
        assert_eq!(load(&[("X_MAX_RESULTS", "junk")]).unwrap().x_api.max_results, 100);
    }

    #[test]
    fn invalid_feed_url_is_rejected() {
        let err = load(&[("FEED_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { key: "FEED_URL", .. }));
    }
}
