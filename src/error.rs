use thiserror::Error;

#[derive(Error, Debug)]
pub enum GolfError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("round parse error: {0}")]
    RoundParse(String),

    #[error("invalid round: {0}")]
    InvalidRound(String),

    #[error("invalid wolf setup: {0}")]
    InvalidWolfSetup(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GolfError>;
