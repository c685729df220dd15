use std::sync::Arc;

use thiserror::Error;

use crate::{
    analysis::{self, AnalysisResult},
    api::{ApiError, XApiClient},
    domain::Post,
};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug)]
pub enum SearchOutcome {
    Empty {
        query: String,
    },
    Analyzed {
        query: String,
        posts: Vec<Post>,
        analysis: AnalysisResult,
    },
}

pub struct SearchService {
    api: Arc<XApiClient>,
}

impl SearchService {
    pub fn new(api: Arc<XApiClient>) -> Self {
        Self { api }
    }

    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        if !self.api.has_credential() {
            return Err(ApiError::MissingCredential.into());
        }

        let posts = self
            .api
            .search_recent(&original_posts_query(query))
            .await?
            .into_posts();

        if posts.is_empty() {
            tracing::info!(target: "search", query, "no posts found");
            return Ok(SearchOutcome::Empty {
                query: query.to_string(),
            });
        }

        let analysis = analysis::analyze(&posts);
        tracing::info!(
            target: "search",
            query,
            posts = posts.len(),
            keywords = analysis.trending_keywords.len(),
            "search analyzed"
        );
        Ok(SearchOutcome::Analyzed {
            query: query.to_string(),
            posts,
            analysis,
        })
    }
}

pub fn original_posts_query(query: &str) -> String {
    format!("{} -is:retweet", query.trim())
}
