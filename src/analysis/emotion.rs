use serde::{Deserialize, Serialize};

const ANGER_TRIGGERS: &[&str] = &[
    "許せない",
    "最悪",
    "ふざけるな",
    "怒",
    "反対",
    "辞めろ",
    "嘘つき",
    "クソ",
    "死ね",
    "馬鹿",
    "異常",
    "ひどい",
];

const ANXIETY_TRIGGERS: &[&str] = &[
    "不安",
    "心配",
    "怖い",
    "恐ろしい",
    "大丈夫",
    "危険",
    "リスク",
    "崩壊",
    "パニック",
    "困る",
    "迷う",
];

const HOPE_TRIGGERS: &[&str] = &[
    "期待",
    "希望",
    "楽しみ",
    "応援",
    "頑張れ",
    "未来",
    "解決",
    "前進",
    "良くなる",
    "信じる",
    "賛成",
];

const EMPATHY_TRIGGERS: &[&str] = &[
    "わかる",
    "同意",
    "その通り",
    "確かに",
    "同じ",
    "共感",
    "泣ける",
    "感動",
    "ありがとう",
    "感謝",
    "お大事に",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anger,
    Anxiety,
    Hope,
    Empathy,
    Neutral,
}

impl Emotion {
    // Classification order.
    pub const SCORED: [Emotion; 4] = [
        Emotion::Anger,
        Emotion::Anxiety,
        Emotion::Hope,
        Emotion::Empathy,
    ];

    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Emotion::Anger => ANGER_TRIGGERS,
            Emotion::Anxiety => ANXIETY_TRIGGERS,
            Emotion::Hope => HOPE_TRIGGERS,
            Emotion::Empathy => EMPATHY_TRIGGERS,
            Emotion::Neutral => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Emotion::Anger => "怒り",
            Emotion::Anxiety => "不安",
            Emotion::Hope => "期待",
            Emotion::Empathy => "共感",
            Emotion::Neutral => "中立",
        }
    }

    /// Only a strictly greater match count replaces the current best, so a
    /// tie keeps the category checked first and no match at all is `Neutral`.
    pub fn classify(text: &str) -> Emotion {
        let mut best = Emotion::Neutral;
        let mut best_count = 0;
        for emotion in Self::SCORED {
            let count = count_matches(text, emotion.triggers());
            if count > best_count {
                best = emotion;
                best_count = count;
            }
        }
        best
    }
}

pub fn count_matches(text: &str, triggers: &[&str]) -> usize {
    triggers
        .iter()
        .filter(|trigger| text.contains(**trigger))
        .count()
}
