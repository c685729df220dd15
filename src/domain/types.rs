use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tweet_volume: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendEntry {
    pub label: String,
    pub detail: String,
}

impl TrendEntry {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum TrendSource {
    XSearch,
    XPlace(u32),
    YahooNews,
    Offline(String),
}

impl fmt::Display for TrendSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendSource::XSearch => f.write_str("X Search (Live)"),
            TrendSource::XPlace(woeid) => write!(f, "X Trends (WOEID {woeid})"),
            TrendSource::YahooNews => f.write_str("Yahoo! News (Live)"),
            TrendSource::Offline(reason) => write!(f, "Offline: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBoard {
    pub source: TrendSource,
    pub entries: Vec<TrendEntry>,
}
