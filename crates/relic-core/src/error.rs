use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelicError {
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RelicResult<T> = Result<T, RelicError>;
