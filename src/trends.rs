use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    analysis::KeywordExtractor,
    api::{ApiError, XApiClient},
    domain::{Post, Trend, TrendBoard, TrendEntry, TrendSource},
    feed::FeedFetcher,
};

pub const TREND_QUERY: &str = "lang:ja -is:retweet min_retweets:100";
const HEADLINE_DETAIL: &str = "Yahoo! Top";
const OFFLINE_ENTRIES: &[(&str, &str)] = &[
    ("API制限", "Check Plan"),
    ("通信エラー", "Retry Later"),
    ("増税", "Fallback"),
    ("裏金", "Fallback"),
    ("少子化", "Fallback"),
];

pub struct TrendService {
    api: Arc<XApiClient>,
    feed: FeedFetcher,
    extractor: KeywordExtractor,
}

impl TrendService {
    pub fn new(api: Arc<XApiClient>, feed: FeedFetcher) -> Self {
        Self {
            api,
            feed,
            extractor: KeywordExtractor::trending(),
        }
    }

    pub async fn load(&self) -> TrendBoard {
        if !self.api.has_credential() {
            info!(target: "trends", "no API credential; using feed headlines");
            return self.feed_board().await;
        }

        match self.live_board().await {
            Ok(Some(board)) => board,
            Ok(None) => {
                warn!(target: "trends", "live search produced no keywords; falling back to feed");
                self.feed_board().await
            }
            Err(err) => {
                warn!(target: "trends", error = %err, "live search failed; falling back to feed");
                self.feed_board().await
            }
        }
    }

    pub async fn load_place(&self) -> TrendBoard {
        let woeid = self.api.trend_woeid();
        match self.api.place_trends(woeid).await {
            Ok(trends) => match board_from_place_trends(woeid, &trends) {
                Some(board) => board,
                None => {
                    warn!(target: "trends", woeid, "place trends were empty; falling back to feed");
                    self.feed_board().await
                }
            },
            Err(err) => {
                warn!(target: "trends", woeid, error = %err, "place trends failed; falling back to feed");
                self.feed_board().await
            }
        }
    }

    async fn live_board(&self) -> Result<Option<TrendBoard>, ApiError> {
        let posts = self.api.search_recent(TREND_QUERY).await?.into_posts();
        Ok(board_from_posts(&posts, &self.extractor))
    }

    async fn feed_board(&self) -> TrendBoard {
        match self.feed.fetch_headlines().await {
            Ok(headlines) => board_from_headlines(headlines),
            Err(err) => {
                warn!(target: "trends", error = %err, "feed unavailable; showing offline board");
                offline_board(&err.to_string())
            }
        }
    }
}

pub fn board_from_posts(posts: &[Post], extractor: &KeywordExtractor) -> Option<TrendBoard> {
    let ranked = extractor.ranked(posts.iter().map(|post| post.text.as_str()));
    if ranked.is_empty() {
        return None;
    }
    let entries = ranked
        .into_iter()
        .map(|(token, count)| TrendEntry::new(token, format!("{}+ Reac", count * 10)))
        .collect();
    Some(TrendBoard {
        source: TrendSource::XSearch,
        entries,
    })
}

pub fn board_from_place_trends(woeid: u32, trends: &[Trend]) -> Option<TrendBoard> {
    if trends.is_empty() {
        return None;
    }
    let entries = trends
        .iter()
        .map(|trend| {
            let detail = trend
                .tweet_volume
                .map(|volume| format!("{volume} posts"))
                .unwrap_or_else(|| "-".to_string());
            TrendEntry::new(trend.name.clone(), detail)
        })
        .collect();
    Some(TrendBoard {
        source: TrendSource::XPlace(woeid),
        entries,
    })
}

pub fn board_from_headlines(headlines: Vec<String>) -> TrendBoard {
    TrendBoard {
        source: TrendSource::YahooNews,
        entries: headlines
            .into_iter()
            .map(|title| TrendEntry::new(title, HEADLINE_DETAIL))
            .collect(),
    }
}

pub fn offline_board(reason: &str) -> TrendBoard {
    TrendBoard {
        source: TrendSource::Offline(reason.to_string()),
        entries: OFFLINE_ENTRIES
            .iter()
            .map(|(label, detail)| TrendEntry::new(*label, *detail))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(texts: &[&str]) -> Vec<Post> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Post::new(i.to_string(), *text))
            .collect()
    }

    #[test]
    fn live_board_scales_counts() {
        let batch = posts(&["円安 株価", "円安 今日 2024", "円安 株価 裏金"]);
        let board = board_from_posts(&batch, &KeywordExtractor::trending()).unwrap();
        assert_eq!(board.source, TrendSource::XSearch);
        assert_eq!(
            board.entries,
            vec![
                TrendEntry::new("円安", "30+ Reac"),
                TrendEntry::new("株価", "20+ Reac"),
                TrendEntry::new("裏金", "10+ Reac"),
            ]
        );
    }

    #[test]
    fn live_board_is_capped_at_five() {
        let batch = posts(&["話題一 話題二 話題三 話題四 話題五 話題六 話題七"]);
        let board = board_from_posts(&batch, &KeywordExtractor::trending()).unwrap();
        assert_eq!(board.entries.len(), 5);
        assert_eq!(board.entries[4].label, "話題五");
    }

    #[test]
    fn live_board_without_keywords_defers() {
        let batch = posts(&["今日 RT 2024", "私 https://t.co/x"]);
        assert!(board_from_posts(&batch, &KeywordExtractor::trending()).is_none());
        assert!(board_from_posts(&[], &KeywordExtractor::trending()).is_none());
    }

    #[test]
    fn headlines_are_labelled() {
        let board = board_from_headlines(vec!["大雪 交通に影響".to_string()]);
        assert_eq!(board.source.to_string(), "Yahoo! News (Live)");
        assert_eq!(board.entries, vec![TrendEntry::new("大雪 交通に影響", "Yahoo! Top")]);
    }

    #[test]
    fn place_trends_show_volume_when_known() {
        let trends = vec![
            Trend {
                name: "#増税".to_string(),
                url: None,
                tweet_volume: Some(52000),
            },
            Trend {
                name: "裏金".to_string(),
                url: None,
                tweet_volume: None,
            },
        ];
        let board = board_from_place_trends(23_424_856, &trends).unwrap();
        assert_eq!(board.source.to_string(), "X Trends (WOEID 23424856)");
        assert_eq!(board.entries[0], TrendEntry::new("#増税", "52000 posts"));
        assert_eq!(board.entries[1], TrendEntry::new("裏金", "-"));
        assert!(board_from_place_trends(1, &[]).is_none());
    }

    #[test]
    fn offline_board_reports_reason() {
        let board = offline_board("HTTP 503");
        assert_eq!(board.source.to_string(), "Offline: HTTP 503");
        assert_eq!(board.entries.len(), 5);
        assert_eq!(board.entries[0], TrendEntry::new("API制限", "Check Plan"));
    }
}
