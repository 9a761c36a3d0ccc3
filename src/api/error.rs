use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Symbol must not be empty")]
    EmptySymbol,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    Status(StatusCode),

    #[error("Unexpected API response: {0}")]
    Malformed(String),

    #[error("Requested {requested} but received {received}")]
    SymbolMismatch { requested: String, received: String },

    #[error("Invalid logo URL '{url}': {reason}")]
    InvalidLogoUrl { url: String, reason: String },
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
