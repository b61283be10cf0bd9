use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum FontlabsError {
    #[error("Font not found: {0}")]
    FontNotFound(Uuid),

    #[error("No font with slug '{0}'")]
    SlugNotFound(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Authentication required: {0}")]
    AuthRequired(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FontlabsError>;
