pub mod dto;
pub mod error;
pub mod image_fetcher;
pub mod quote_client;
pub mod utils;

pub use error::{ApiError, ApiResult};
pub use image_fetcher::ImageFetcher;
pub use quote_client::QuoteClient;
