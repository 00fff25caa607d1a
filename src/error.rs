use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("decode: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
    #[error("config: {0}")]
    Config(#[from] config::ConfigError),
    #[error("output: {0}")]
    Output(#[from] std::io::Error),
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
