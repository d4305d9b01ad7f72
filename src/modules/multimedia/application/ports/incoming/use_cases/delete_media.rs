use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteMediaError {
    #[error("Invalid file reference: {0}")]
    InvalidReference(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Best-effort removal of a previously uploaded file. Records that still
/// point at the file are left alone.
#[async_trait]
pub trait DeleteMediaUseCase: Send + Sync {
    async fn execute(&self, file_url: &str) -> Result<(), DeleteMediaError>;
}
