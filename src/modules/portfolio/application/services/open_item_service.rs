use async_trait::async_trait;

use crate::portfolio::application::domain::content_repository::ContentRepository;
use crate::portfolio::application::domain::edit_session::EditSession;
use crate::portfolio::application::domain::item::{Item, ItemKind};
use crate::portfolio::application::ports::incoming::use_cases::{OpenItemError, OpenItemUseCase};
use crate::portfolio::application::ports::outgoing::DocumentStore;

pub struct OpenItemService<S>
where
    S: DocumentStore,
{
    store: S,
    repository: ContentRepository,
}

impl<S> OpenItemService<S>
where
    S: DocumentStore,
{
    pub fn new(store: S, repository: ContentRepository) -> Self {
        Self { store, repository }
    }
}

#[async_trait]
impl<S> OpenItemUseCase for OpenItemService<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn execute(
        &self,
        kind: ItemKind,
        id: String,
        parent_id: Option<String>,
    ) -> Result<Item, OpenItemError> {
        let document = self
            .store
            .load()
            .await
            .map_err(|e| OpenItemError::Persistence(e.to_string()))?;

        let mut session = EditSession::new(self.repository.clone());
        Ok(session.begin_edit(&document, kind, &id, parent_id.as_deref())?)
    }
}
