pub mod post;
pub mod types;

pub use post::{sort_posts, Post, PostOrder};
pub use types::{Trend, TrendBoard, TrendEntry, TrendSource};
