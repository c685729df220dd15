use reqwest::{header::USER_AGENT, Client};
use thiserror::Error;
use tracing::warn;

use crate::config::FeedConfig;

// The portal answers bare clients with an error page.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const PORTAL_TITLE: &str = "Yahoo!ニュース";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("unreadable feed: {0}")]
    Parse(#[from] rss::Error),
    #[error("No items parsed")]
    Empty,
}

pub struct FeedFetcher {
    client: Client,
    config: FeedConfig,
}

impl FeedFetcher {
    pub fn new(client: Client, config: FeedConfig) -> Self {
        Self { client, config }
    }

    pub async fn fetch_headlines(&self) -> Result<Vec<String>, FeedError> {
        let response = self
            .client
            .get(self.config.url.clone())
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(target: "feed", url = %self.config.url, %status, "feed request rejected");
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let headlines = parse_headlines(&body, self.config.max_items)?;
        if headlines.is_empty() {
            return Err(FeedError::Empty);
        }
        tracing::info!(target: "feed", count = headlines.len(), "headlines fetched");
        Ok(headlines)
    }
}

pub fn parse_headlines(xml: &[u8], limit: usize) -> Result<Vec<String>, FeedError> {
    let channel = rss::Channel::read_from(xml)?;
    Ok(channel
        .items()
        .iter()
        .filter_map(|item| item.title())
        .map(str::trim)
        .filter(|title| !title.is_empty() && !title.contains(PORTAL_TITLE))
        .take(limit)
        .map(str::to_string)
        .collect())
}
