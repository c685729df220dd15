use std::fmt::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{
    analysis::AnalysisResult,
    domain::{Post, TrendBoard},
};

const BAR_WIDTH: usize = 20;
const PREVIEW_POSTS: usize = 5;
const PREVIEW_CHARS: usize = 60;

pub fn render_analysis(
    query: &str,
    posts: &[Post],
    analysis: &AnalysisResult,
    tz: Tz,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "分析結果: {query} (直近{}件)", posts.len());
    let _ = writeln!(
        out,
        "分析時刻: {}",
        now.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z")
    );
    out.push('\n');

    out.push_str("感情分布\n");
    if analysis.distribution.is_empty() {
        out.push_str("  (判定できる投稿がありません)\n");
    } else {
        for (emotion, share) in analysis.distribution.iter() {
            let _ = writeln!(
                out,
                "  {} {} {:>5.1}%",
                emotion.label(),
                bar(share),
                share * 100.0
            );
        }
    }
    if analysis.neutral_posts > 0 {
        let _ = writeln!(out, "  中立 {}件", analysis.neutral_posts);
    }
    out.push('\n');

    out.push_str("トレンドキーワード\n");
    if analysis.trending_keywords.is_empty() {
        out.push_str("  -\n");
    }
    for (rank, keyword) in analysis.trending_keywords.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {keyword}", rank + 1);
    }
    out.push('\n');

    out.push_str("投稿\n");
    for post in posts.iter().take(PREVIEW_POSTS) {
        let metrics = post.metrics();
        let _ = writeln!(
            out,
            "  - {}{} (♥{} ⟳{})",
            posted_at(post, tz),
            preview(&post.text),
            metrics.like_count,
            metrics.retweet_count
        );
    }
    out
}

pub fn render_empty(query: &str) -> String {
    format!("「{query}」の検索結果が見つかりませんでした\n")
}

pub fn render_board(board: &TrendBoard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "トレンド [{}]", board.source);
    for (rank, entry) in board.entries.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}  {}", rank + 1, entry.label, entry.detail);
    }
    out
}

fn posted_at(post: &Post, tz: Tz) -> String {
    post.created_at
        .map(|ts| format!("[{}] ", ts.with_timezone(&tz).format("%m/%d %H:%M")))
        .unwrap_or_default()
}

fn bar(share: f64) -> String {
    let filled = ((share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(PREVIEW_CHARS).collect();
    cut.push('…');
    cut
}
