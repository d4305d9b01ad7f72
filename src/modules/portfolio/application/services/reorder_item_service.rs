use async_trait::async_trait;

use crate::portfolio::application::domain::content_repository::{ContentRepository, Direction};
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::item::ItemKind;
use crate::portfolio::application::ports::incoming::use_cases::{
    ReorderItemError, ReorderItemUseCase,
};
use crate::portfolio::application::ports::outgoing::DocumentStore;

use super::DocumentWriteLock;

pub struct ReorderItemService<S>
where
    S: DocumentStore,
{
    store: S,
    repository: ContentRepository,
    write_lock: DocumentWriteLock,
}

impl<S> ReorderItemService<S>
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
impl<S> ReorderItemUseCase for ReorderItemService<S>
where
    S: DocumentStore + Send + Sync,
{
    /// The store re-sorts the date-stamped collections on save, so the
    /// returned document reflects the persisted order.
    async fn execute(
        &self,
        kind: ItemKind,
        id: String,
        direction: Direction,
    ) -> Result<PortfolioDocument, ReorderItemError> {
        let _guard = self.write_lock.acquire().await;
        let document = self
            .store
            .load()
            .await
            .map_err(|e| ReorderItemError::Persistence(e.to_string()))?;

        let updated = self
            .repository
            .reorder(&document, kind, &id, direction)?
            .canonicalized();

        self.store
            .save(&updated)
            .await
            .map_err(|e| ReorderItemError::Persistence(e.to_string()))?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::content_repository::ContentError;
    use crate::portfolio::application::domain::default_document::default_document;
    use crate::portfolio::application::domain::item::UnknownItemKind;
    use crate::tests::support::document_store_mock::MockDocumentStoreMock;

    #[tokio::test]
    async fn test_execute_rejects_unordered_kind_without_saving() {
        let mut store = MockDocumentStoreMock::new();
        store.expect_load().returning(|| Ok(default_document()));
        store.expect_save().never();

        let service =
            ReorderItemService::new(store, ContentRepository::new(), DocumentWriteLock::new());

        let res = service
            .execute(ItemKind::Award, "a1".to_string(), Direction::Down)
            .await;

        assert_eq!(
            res,
            Err(ReorderItemError::Content(ContentError::UnknownItemKind(
                UnknownItemKind("award".to_string())
            )))
        );
    }

    #[tokio::test]
    async fn test_execute_saves_after_reorder() {
        let mut store = MockDocumentStoreMock::new();
        store.expect_load().returning(|| Ok(default_document()));
        store.expect_save().times(1).returning(|_| Ok(()));

        let service =
            ReorderItemService::new(store, ContentRepository::new(), DocumentWriteLock::new());

        let res = service
            .execute(ItemKind::Timeline, "missing".to_string(), Direction::Up)
            .await;

        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_swap_between_equal_timestamps_is_persisted() {
        use crate::portfolio::application::domain::item::Item;
        use crate::tests::support::document_store_mock::InMemoryDocumentStore;
        use chrono::{TimeZone, Utc};

        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut doc = default_document();
        for id in ["first", "second"] {
            let Item::Project(mut project) =
                ContentRepository::new().create_draft(ItemKind::Project, None)
            else {
                unreachable!()
            };
            project.id = id.to_string();
            project.created_at = at;
            project.updated_at = at;
            doc.projects.push(project);
        }
        let store = InMemoryDocumentStore::new(doc);

        let service = ReorderItemService::new(
            store.clone(),
            ContentRepository::new(),
            DocumentWriteLock::new(),
        );

        let returned = service
            .execute(ItemKind::Project, "second".to_string(), Direction::Up)
            .await
            .unwrap();

        let ids = |doc: &PortfolioDocument| -> Vec<String> {
            doc.projects.iter().map(|p| p.id.clone()).collect()
        };
        assert_eq!(ids(&returned), vec!["second", "first"]);
        assert_eq!(ids(&store.snapshot().await), vec!["second", "first"]);
    }
}
