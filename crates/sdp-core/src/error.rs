use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdpError {
    #[error("unsupported language '{0}': expected one of en, ja")]
    InvalidLanguage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SdpError>;
