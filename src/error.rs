use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    /// The provider answered, but not with the expected candidates/content/parts shape.
    #[error("Unexpected response format: {0}")]
    ResponseFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn response_format(msg: impl Into<String>) -> Self {
        Self::ResponseFormat(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True when the provider was reached but its reply could not be reshaped.
    pub fn is_response_format(&self) -> bool {
        matches!(self, Self::ResponseFormat(_))
    }
}
