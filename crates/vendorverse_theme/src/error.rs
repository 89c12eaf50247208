use thiserror::Error;
use vendorverse_core::{HostError, StorageError};

/// A theme id outside the supported set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    UnknownTheme(#[from] UnknownTheme),

    #[error("Invalid theme config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse theme config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize theme config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
