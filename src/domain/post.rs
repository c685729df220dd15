use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<PublicMetrics>,
}

impl Post {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            created_at: None,
            public_metrics: None,
        }
    }

    pub fn metrics(&self) -> PublicMetrics {
        self.public_metrics.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub quote_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PostOrder {
    #[default]
    Newest,
    Oldest,
    Likes,
}

/// Stable: posts with equal keys keep their API order. Posts without a
/// timestamp sort as older than any dated post.
pub fn sort_posts(posts: &mut [Post], order: PostOrder) {
    match order {
        PostOrder::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        PostOrder::Oldest => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        PostOrder::Likes => {
            posts.sort_by(|a, b| b.metrics().like_count.cmp(&a.metrics().like_count))
        }
    }
}
