#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Local storage is unavailable")]
    StorageUnavailable,

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
