use thiserror::Error;

/// Errors produced while loading the dataset or building card assets.
#[derive(Debug, Error)]
pub enum CardsError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(String),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to encode verification code: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
