use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Mutex;

use crate::multimedia::application::domain::entities::{MediaReference, StoredMedia};
use crate::multimedia::application::ports::outgoing::{MediaStorage, MediaStorageError};

mock! {
    pub MediaStorageMock {}
    #[async_trait]
    impl MediaStorage for MediaStorageMock {
        async fn store(
            &self,
            reference: &MediaReference,
            bytes: &[u8],
        ) -> Result<StoredMedia, MediaStorageError>;
        async fn delete(&self, reference: &MediaReference) -> Result<(), MediaStorageError>;
        async fn list(&self) -> Result<Vec<StoredMedia>, MediaStorageError>;
    }
}

/// Storage keyed by reference URL.
#[derive(Clone, Default)]
pub struct InMemoryMediaStorage {
    files: Arc<Mutex<BTreeMap<String, (MediaReference, Vec<u8>)>>>,
}

impl InMemoryMediaStorage {
    pub async fn insert(&self, reference: MediaReference, bytes: &[u8]) {
        self.files
            .lock()
            .await
            .insert(reference.url(), (reference, bytes.to_vec()));
    }

    pub async fn urls(&self) -> Vec<String> {
        self.files.lock().await.keys().cloned().collect()
    }
}

fn stored(reference: &MediaReference, bytes: &[u8]) -> StoredMedia {
    StoredMedia {
        name: reference.file_name().to_string(),
        url: reference.url(),
        size_bytes: bytes.len() as u64,
        category: reference.category(),
    }
}

#[async_trait]
impl MediaStorage for InMemoryMediaStorage {
    async fn store(
        &self,
        reference: &MediaReference,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaStorageError> {
        self.insert(reference.clone(), bytes).await;
        Ok(stored(reference, bytes))
    }

    async fn delete(&self, reference: &MediaReference) -> Result<(), MediaStorageError> {
        self.files
            .lock()
            .await
            .remove(&reference.url())
            .map(|_| ())
            .ok_or_else(|| MediaStorageError::NotFound(reference.url()))
    }

    async fn list(&self) -> Result<Vec<StoredMedia>, MediaStorageError> {
        Ok(self
            .files
            .lock()
            .await
            .values()
            .map(|(reference, bytes)| stored(reference, bytes))
            .collect())
    }
}
