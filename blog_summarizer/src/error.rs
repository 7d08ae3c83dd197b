#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("completion had no content")]
    EmptyCompletion,

    #[error("could not extract article from {0}")]
    ExtractionFailed(String),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type SummarizerResult<T> = Result<T, SummarizerError>;
