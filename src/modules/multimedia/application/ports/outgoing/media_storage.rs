use async_trait::async_trait;

use crate::multimedia::application::domain::entities::{MediaReference, StoredMedia};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaStorageError {
    #[error("Stored file not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Byte storage for uploads, partitioned by category.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Write the bytes under the reference. An existing file of the same name is replaced.
    async fn store(
        &self,
        reference: &MediaReference,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStorageError>;

    async fn delete(&self, reference: &MediaReference) -> Result<(), MediaStorageError>;

    /// Every stored file across all categories.
    async fn list(&self) -> Result<Vec<StoredMedia>, MediaStorageError>;
}
