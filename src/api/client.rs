use reqwest::Client;

use crate::{config::XApiConfig, domain::Trend};

use super::models::{
    check_status, parse_place_trends, parse_search, ApiError, SearchResponse, PLACE_TRENDS_PATH,
    SEARCH_RECENT_PATH, TWEET_FIELDS,
};

#[derive(Clone)]
pub struct XApiClient {
    http: Client,
    config: XApiConfig,
}

impl XApiClient {
    pub fn new(http: Client, config: XApiConfig) -> Self {
        Self { http, config }
    }

    pub fn has_credential(&self) -> bool {
        self.config.bearer_token.is_some()
    }

    pub fn trend_woeid(&self) -> u32 {
        self.config.trend_woeid
    }

    pub async fn search_recent(&self, query: &str) -> Result<SearchResponse, ApiError> {
        let token = self.token()?;
        let url = self.config.base_url.join(SEARCH_RECENT_PATH)?;
        let max_results = self.config.max_results.to_string();

        tracing::debug!(target: "api", %url, query, "searching recent posts");
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[
                ("query", query),
                ("max_results", max_results.as_str()),
                ("tweet.fields", TWEET_FIELDS),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        check_status(status, &body)?;

        let parsed = parse_search(&body)?;
        let meta = parsed.meta.as_ref();
        tracing::info!(
            target: "api",
            query,
            posts = meta.map_or(0, |m| m.result_count),
            has_more = meta.is_some_and(|m| m.next_token.is_some()),
            "recent search completed"
        );
        Ok(parsed)
    }

    pub async fn place_trends(&self, woeid: u32) -> Result<Vec<Trend>, ApiError> {
        let token = self.token()?;
        let url = self.config.base_url.join(PLACE_TRENDS_PATH)?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[("id", woeid)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        check_status(status, &body)?;

        let trends = parse_place_trends(&body)?;
        tracing::info!(target: "api", woeid, trends = trends.len(), "place trends fetched");
        Ok(trends)
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.config
            .bearer_token
            .as_deref()
            .ok_or(ApiError::MissingCredential)
    }
}
