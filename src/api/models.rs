use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Post, Trend};

pub const SEARCH_RECENT_PATH: &str = "2/tweets/search/recent";
pub const PLACE_TRENDS_PATH: &str = "1.1/trends/place.json";
pub const TWEET_FIELDS: &str = "created_at,public_metrics";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("X_BEARER_TOKEN is not configured")]
    MissingCredential,
    #[error("API access denied ({status}); check the plan and remaining credits")]
    Forbidden { status: u16 },
    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<Post>>,
    #[serde(default)]
    pub meta: Option<SearchMeta>,
}

impl SearchResponse {
    pub fn into_posts(self) -> Vec<Post> {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrendLocation {
    #[serde(default)]
    pub trends: Option<Vec<Trend>>,
}

// 402 and 403 both mean the account's plan does not cover the endpoint.
pub fn check_status(status: StatusCode, body: &str) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }
    if matches!(status.as_u16(), 402 | 403) {
        return Err(ApiError::Forbidden {
            status: status.as_u16(),
        });
    }
    let message = error_detail(body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

pub fn parse_search(body: &str) -> Result<SearchResponse, ApiError> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_place_trends(body: &str) -> Result<Vec<Trend>, ApiError> {
    let locations: Vec<TrendLocation> = serde_json::from_str(body)?;
    Ok(locations
        .into_iter()
        .flat_map(|location| location.trends.unwrap_or_default())
        .collect())
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.detail.or(parsed.title).filter(|v| !v.is_empty())
}
