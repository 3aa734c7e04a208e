use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArthaVivekError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Unknown persona: {0}")]
    InvalidPersona(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Knowledge store is not available")]
    StoreUnavailable,

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, ArthaVivekError>;
