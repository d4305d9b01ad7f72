use async_trait::async_trait;
use tracing::{info, warn};

use crate::multimedia::application::domain::entities::MediaReference;
use crate::multimedia::application::ports::incoming::use_cases::{
    DeleteMediaError, DeleteMediaUseCase,
};
use crate::multimedia::application::ports::outgoing::{MediaStorage, MediaStorageError};

pub struct DeleteMediaService<S>
where
    S: MediaStorage,
{
    storage: S,
}

impl<S> DeleteMediaService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> DeleteMediaUseCase for DeleteMediaService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(&self, file_url: &str) -> Result<(), DeleteMediaError> {
        let reference = MediaReference::parse(file_url.trim()).map_err(|e| {
            warn!("Refused to delete {}: {}", file_url, e);
            DeleteMediaError::InvalidReference(e.to_string())
        })?;

        match self.storage.delete(&reference).await {
            Ok(()) => {
                info!(url = %reference.url(), "Deleted upload");
                Ok(())
            }
            Err(MediaStorageError::NotFound(_)) => Err(DeleteMediaError::NotFound(reference.url())),
            Err(MediaStorageError::Io(e)) => Err(DeleteMediaError::Storage(e)),
        }
    }
}
