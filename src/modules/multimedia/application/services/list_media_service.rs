use async_trait::async_trait;

use crate::multimedia::application::domain::entities::StoredMedia;
use crate::multimedia::application::ports::incoming::use_cases::{
    ListMediaError, ListMediaUseCase,
};
use crate::multimedia::application::ports::outgoing::MediaStorage;

pub struct ListMediaService<S>
where
    S: MediaStorage,
{
    storage: S,
}

impl<S> ListMediaService<S>
where
    S: MediaStorage,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S> ListMediaUseCase for ListMediaService<S>
where
    S: MediaStorage + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<StoredMedia>, ListMediaError> {
        self.storage
            .list()
            .await
            .map_err(|e| ListMediaError::Storage(e.to_string()))
    }
}
