use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s[:punct:]「」【】『』。、！？]+").expect("valid separator regex")
});

pub const STOP_WORDS: &[&str] = &[
    "ある", "ない", "する", "いる", "の", "に", "を", "て", "で", "が", "と", "は", "ます", "です",
    "こと", "もの", "ため", "よう", "それ", "これ", "あれ", "さん", "ちゃん", "くん", "http",
    "https", "t.co", "amp",
];

pub const TREND_STOP_WORDS: &[&str] = &[
    "今日", "明日", "昨日", "日本", "自分", "私", "僕", "俺", "みんな",
];

const MIN_TOKEN_CHARS: usize = 2;

/// Ranking is a stable sort on descending count, so tokens with equal counts
/// keep the order in which they first appeared in the batch.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    limit: usize,
    skip_ascii_alphanumeric: bool,
}

impl KeywordExtractor {
    pub fn analysis() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            limit: 10,
            skip_ascii_alphanumeric: false,
        }
    }

    pub fn trending() -> Self {
        Self {
            stop_words: STOP_WORDS
                .iter()
                .chain(TREND_STOP_WORDS.iter())
                .copied()
                .collect(),
            limit: 5,
            skip_ascii_alphanumeric: true,
        }
    }

    pub fn extract<'a, I>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.ranked(texts)
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    pub fn ranked<'a, I>(&self, texts: I) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        // Splitting each text separately equals splitting the space-joined batch.
        for text in texts {
            for token in SEPARATORS.split(text).map(str::trim) {
                if !self.keeps(token) {
                    continue;
                }
                match index.get(token) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        index.insert(token, counts.len());
                        counts.push((token, 1));
                    }
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(self.limit)
            .map(|(token, count)| (token.to_string(), count))
            .collect()
    }

    fn keeps(&self, token: &str) -> bool {
        if token.chars().count() < MIN_TOKEN_CHARS {
            return false;
        }
        if self.stop_words.contains(token) || token.contains("http") {
            return false;
        }
        !(self.skip_ascii_alphanumeric && token.chars().all(|ch| ch.is_ascii_alphanumeric()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_full_width_and_ascii_punctuation() {
        let extractor = KeywordExtractor::analysis();
        let keywords = extractor.extract(["「増税」【速報】『議論』。国会、予算！本当？(修正)"]);
        assert_eq!(
            keywords,
            vec!["増税", "速報", "議論", "国会", "予算", "本当", "修正"]
        );
    }

    #[test]
    fn splits_on_ideographic_space() {
        let extractor = KeywordExtractor::analysis();
        assert_eq!(extractor.extract(["少子化\u{3000}対策"]), vec!["少子化", "対策"]);
    }

    #[test]
    fn length_is_counted_in_characters() {
        let extractor = KeywordExtractor::analysis();
        // "雨" is three bytes but a single character.
        assert_eq!(extractor.extract(["雨 晴れ a ok"]), vec!["晴れ", "ok"]);
    }

    #[test]
    fn drops_stop_words_and_link_fragments() {
        let extractor = KeywordExtractor::analysis();
        let keywords =
            extractor.extract(["これ です https://t.co/abc 見て httpbin こと amp ニュース"]);
        // The URL is split on ':' '/' '.' first; only its scheme is filtered.
        assert_eq!(keywords, vec!["co", "abc", "見て", "ニュース"]);
    }

    #[test]
    fn ranks_by_count_then_first_occurrence() {
        let extractor = KeywordExtractor::analysis();
        let ranked = extractor.ranked(["選挙 天気 円安", "円安 天気", "円安 野球"]);
        assert_eq!(
            ranked,
            vec![
                ("円安".to_string(), 3),
                ("天気".to_string(), 2),
                ("選挙".to_string(), 1),
                ("野球".to_string(), 1),
            ]
        );
    }

    #[test]
    fn analysis_profile_caps_at_ten_distinct_tokens() {
        let extractor = KeywordExtractor::analysis();
        let text = (0..30)
            .map(|i| format!("語{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        let doubled = format!("{text} {text}");
        let keywords = extractor.extract([doubled.as_str()]);
        assert_eq!(keywords.len(), 10);
        let unique: HashSet<_> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        assert_eq!(keywords[0], "語00");
        assert_eq!(keywords[9], "語09");
    }

    #[test]
    fn trending_profile_drops_ascii_tokens_and_common_words() {
        let extractor = KeywordExtractor::trending();
        let ranked = extractor.ranked(["今日 bitcoin 2024 円安", "みんな 円安 X_AI"]);
        // "X_AI" splits on the underscore and both halves are dropped.
        assert_eq!(ranked, vec![("円安".to_string(), 2)]);
    }

    #[test]
    fn analysis_profile_keeps_ascii_tokens() {
        let extractor = KeywordExtractor::analysis();
        assert_eq!(extractor.extract(["bitcoin 2024"]), vec!["bitcoin", "2024"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let extractor = KeywordExtractor::analysis();
        assert!(extractor.extract(std::iter::empty::<&str>()).is_empty());
        assert!(extractor.extract(["", "   ", "。、"]).is_empty());
    }
}
