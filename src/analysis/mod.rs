mod analyzer;
pub mod emotion;
pub mod keywords;

pub use analyzer::{analyze, AnalysisResult};
pub use keywords::KeywordExtractor;
