pub mod client;
pub mod models;

pub use client::XApiClient;
pub use models::ApiError;
