use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::Post;

use super::{emotion::Emotion, keywords::KeywordExtractor};

static EXTRACTOR: Lazy<KeywordExtractor> = Lazy::new(KeywordExtractor::analysis);

// Either the four shares sum to 1.0 or all of them are 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub anger: f64,
    pub anxiety: f64,
    pub hope: f64,
    pub empathy: f64,
}

impl Distribution {
    fn from_tally(tally: &Tally) -> Self {
        let total_valid = tally.anger + tally.anxiety + tally.hope + tally.empathy;
        if total_valid == 0 {
            return Self::default();
        }
        let total = total_valid as f64;
        Self {
            anger: tally.anger as f64 / total,
            anxiety: tally.anxiety as f64 / total,
            hope: tally.hope as f64 / total,
            empathy: tally.empathy as f64 / total,
        }
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Anxiety => self.anxiety,
            Emotion::Hope => self.hope,
            Emotion::Empathy => self.empathy,
            Emotion::Neutral => 0.0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::SCORED
            .into_iter()
            .map(move |emotion| (emotion, self.get(emotion)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, share)| share == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub distribution: Distribution,
    pub trending_keywords: Vec<String>,
    pub neutral_posts: usize,
}

#[derive(Debug, Default)]
struct Tally {
    anger: usize,
    anxiety: usize,
    hope: usize,
    empathy: usize,
    neutral: usize,
}

impl Tally {
    fn record(&mut self, emotion: Emotion) {
        match emotion {
            Emotion::Anger => self.anger += 1,
            Emotion::Anxiety => self.anxiety += 1,
            Emotion::Hope => self.hope += 1,
            Emotion::Empathy => self.empathy += 1,
            Emotion::Neutral => self.neutral += 1,
        }
    }
}

pub fn analyze(posts: &[Post]) -> AnalysisResult {
    analyze_texts(posts.iter().map(|post| post.text.as_str()))
}

pub fn analyze_texts<'a, I>(texts: I) -> AnalysisResult
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let texts = texts.into_iter();
    let mut tally = Tally::default();
    for text in texts.clone() {
        tally.record(Emotion::classify(text));
    }

    let result = AnalysisResult {
        distribution: Distribution::from_tally(&tally),
        trending_keywords: EXTRACTOR.extract(texts),
        neutral_posts: tally.neutral,
    };

    tracing::debug!(
        target: "analysis",
        anger = tally.anger,
        anxiety = tally.anxiety,
        hope = tally.hope,
        empathy = tally.empathy,
        neutral = tally.neutral,
        keywords = result.trending_keywords.len(),
        "batch analyzed"
    );
    result
}
