pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, FeedConfig, XApiConfig};
pub use loader::load_config;
