use async_trait::async_trait;

use crate::multimedia::application::domain::entities::StoredMedia;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListMediaError {
    #[error("Storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait ListMediaUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<StoredMedia>, ListMediaError>;
}
