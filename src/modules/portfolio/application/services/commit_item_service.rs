use async_trait::async_trait;
use tracing::info;

use crate::portfolio::application::domain::content_repository::ContentRepository;
use crate::portfolio::application::domain::edit_session::EditSession;
use crate::portfolio::application::domain::entities::PortfolioDocument;
use crate::portfolio::application::domain::item::Item;
use crate::portfolio::application::ports::incoming::use_cases::{
    CommitItemError, CommitItemUseCase,
};
use crate::portfolio::application::ports::outgoing::DocumentStore;

use super::DocumentWriteLock;

pub struct CommitItemService<S>
where
    S: DocumentStore,
{
    store: S,
    repository: ContentRepository,
    write_lock: DocumentWriteLock,
}

impl<S> CommitItemService<S>
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
impl<S> CommitItemUseCase for CommitItemService<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn execute(
        &self,
        draft: Item,
        parent_id: Option<String>,
    ) -> Result<PortfolioDocument, CommitItemError> {
        let kind = draft.kind();
        let id = draft.id().to_string();

        let _guard = self.write_lock.acquire().await;
        let document = self
            .store
            .load()
            .await
            .map_err(|e| CommitItemError::Persistence(e.to_string()))?;

        let mut session = EditSession::resume(self.repository.clone(), draft, parent_id.as_deref());
        let updated = session.commit(&document)?.canonicalized();

        self.store
            .save(&updated)
            .await
            .map_err(|e| CommitItemError::Persistence(e.to_string()))?;

        info!(%kind, %id, "Item committed");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::content_repository::ContentError;
    use crate::portfolio::application::domain::default_document::default_document;
    use crate::portfolio::application::domain::edit_session::EditSessionError;
    use crate::portfolio::application::domain::item::ItemKind;
    use crate::portfolio::application::domain::validation::ValidationError;
    use crate::portfolio::application::ports::outgoing::DocumentStoreError;
    use crate::tests::support::document_store_mock::MockDocumentStoreMock;

    fn skill_draft(name: &str, level: i32) -> Item {
        match ContentRepository::new().create_draft(ItemKind::Skill, None) {
            Item::Skill(mut skill) => {
                skill.name = name.to_string();
                skill.level = level;
                Item::Skill(skill)
            }
            other => panic!("unexpected draft {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_execute_commits_and_saves() {
        let mut store = MockDocumentStoreMock::new();
        store.expect_load().returning(|| Ok(default_document()));
        store
            .expect_save()
            .withf(|doc| {
                doc.all_skills()
                    .any(|s| s.name == "Rust" && s.category == "programming")
            })
            .times(1)
            .returning(|_| Ok(()));

        let service =
            CommitItemService::new(store, ContentRepository::new(), DocumentWriteLock::new());

        let doc = service
            .execute(skill_draft("Rust", 70), Some("programming".to_string()))
            .await
            .unwrap();

        assert_eq!(doc.skill_categories[0].skills.len(), 5);
    }

    #[tokio::test]
    async fn test_rejected_commit_is_not_saved() {
        let mut store = MockDocumentStoreMock::new();
        store.expect_load().returning(|| Ok(default_document()));
        store.expect_save().never();

        let service =
            CommitItemService::new(store, ContentRepository::new(), DocumentWriteLock::new());

        let res = service
            .execute(skill_draft("Rust", 120), Some("programming".to_string()))
            .await;

        assert!(matches!(
            res,
            Err(CommitItemError::Session(EditSessionError::Content(
                ContentError::Validation(ValidationError::SkillLevelOutOfRange { level: 120, .. })
            )))
        ));
    }

    #[tokio::test]
    async fn test_orphan_skill_is_not_saved() {
        let mut store = MockDocumentStoreMock::new();
        store.expect_load().returning(|| Ok(default_document()));
        store.expect_save().never();

        let service =
            CommitItemService::new(store, ContentRepository::new(), DocumentWriteLock::new());

        let res = service
            .execute(skill_draft("Rust", 80), Some("gone".to_string()))
            .await;

        assert!(matches!(
            res,
            Err(CommitItemError::Session(EditSessionError::Content(
                ContentError::OrphanSkillReference(id)
            ))) if id == "gone"
        ));
    }

    #[tokio::test]
    async fn test_load_failure_maps_to_persistence() {
        let mut store = MockDocumentStoreMock::new();
        store
            .expect_load()
            .returning(|| Err(DocumentStoreError::Read("permission denied".to_string())));

        let service =
            CommitItemService::new(store, ContentRepository::new(), DocumentWriteLock::new());

        let res = service.execute(skill_draft("Rust", 80), None).await;

        assert!(matches!(res, Err(CommitItemError::Persistence(_))));
    }
}
