use thiserror::Error;

#[derive(Debug, Error)]
pub enum VetformError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, VetformError>;
