pub mod client;
pub mod models;

pub use client::BlockstreamClient;
pub use models::ApiError;
