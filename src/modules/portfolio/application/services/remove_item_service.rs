use async_trait::async_trait;
use tracing::info;

use crate::portfolio::application::domain::content_repository::ContentRepository;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::item::ItemKind;
use crate::portfolio::application::ports::incoming::use_cases::{
    RemoveItemError, RemoveItemUseCase,
};
use crate::portfolio::application::ports::outgoing::DocumentStore;

use super::DocumentWriteLock;

pub struct RemoveItemService<S>
where
    S: DocumentStore,
{
    store: S,
    repository: ContentRepository,
    write_lock: DocumentWriteLock,
}

impl<S> RemoveItemService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S, repository: ContentRepository, write_lock: DocumentWriteLock) -> Self {
        Self {
            store,
            repository,
            write_lock,
        }
    }
}

#[async_trait]
impl<S> RemoveItemUseCase for RemoveItemService<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn execute(
        &self,
        kind: ItemKind,
        id: String,
        parent_id: Option<String>,
    ) -> Result<PortfolioDocument, RemoveItemError> {
        let _guard = self.write_lock.acquire().await;
        let document = self
            .store
            .load()
            .await
            .map_err(|e| RemoveItemError::Persistence(e.to_string()))?;

        let updated = self
            .repository
            .remove(&document, kind, &id, parent_id.as_deref())
            .canonicalized();

        self.store
            .save(&updated)
            .await
            .map_err(|e| RemoveItemError::Persistence(e.to_string()))?;

        info!(%kind, %id, "Item removed");
        Ok(updated)
    }
}
