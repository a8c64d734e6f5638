use thiserror::Error;

#[derive(Error, Debug)]
pub enum GazetteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected API response: {0}")]
    Api(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GazetteError>;
