use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use reqwest::Client;

use crate::{
    api::XApiClient,
    config::AppConfig,
    domain::{sort_posts, PostOrder, TrendBoard},
    feed::FeedFetcher,
    report,
    search::{SearchOutcome, SearchService},
    trends::TrendService,
};

pub struct MinescopeApp {
    config: Arc<AppConfig>,
    search: SearchService,
    trends: TrendService,
}

impl MinescopeApp {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(format!("minescope/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.http.timeout)
            .build()
            .context("failed to build HTTP client")?;

        let api = Arc::new(XApiClient::new(http_client.clone(), config.x_api.clone()));
        let feed = FeedFetcher::new(http_client, config.feed.clone());

        Ok(Self {
            search: SearchService::new(api.clone()),
            trends: TrendService::new(api, feed),
            config,
        })
    }

    pub async fn run_search(&self, query: &str, order: PostOrder, json: bool) -> Result<()> {
        let outcome = self
            .search
            .search(query)
            .await
            .with_context(|| format!("search for {query:?} failed"))?;

        match outcome {
            SearchOutcome::Empty { query } => {
                if json {
                    println!("null");
                } else {
                    print!("{}", report::render_empty(&query));
                }
            }
            SearchOutcome::Analyzed {
                query,
                mut posts,
                analysis,
            } => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                } else {
                    sort_posts(&mut posts, order);
                    let text = report::render_analysis(
                        &query,
                        &posts,
                        &analysis,
                        self.timezone(),
                        Utc::now(),
                    );
                    print!("{text}");
                }
            }
        }
        Ok(())
    }

    pub async fn run_trends(&self, place: bool, json: bool) -> Result<()> {
        let board = if place {
            self.trends.load_place().await
        } else {
            self.trends.load().await
        };
        tracing::info!(target: "trends", source = %board.source, entries = board.entries.len(), "trend board ready");
        self.print_board(&board, json)
    }

    fn print_board(&self, board: &TrendBoard, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(board)?);
        } else {
            print!("{}", report::render_board(board));
        }
        Ok(())
    }

    fn timezone(&self) -> Tz {
        self.config
            .timezone
            .parse()
            .unwrap_or(chrono_tz::Asia::Tokyo)
    }
}
